//! HTML table parser for the panel's domain listing and detail pages.
//!
//! The panel renders one table per record type on a detail page, each
//! introduced by a section heading (`<h2>A records</h2>` and so on), with a
//! fixed cell order per type and the row identity embedded in the row's
//! inline edit form or edit link. The coupling to that markup is deliberate
//! and confined to this module: when the panel layout changes, this is the
//! only place to touch.
//!
//! Absent tables and empty listings are normal (an account can have no
//! domains, a domain can have no TXT records); they parse to empty
//! sequences, never to errors.

use scraper::{ElementRef, Html, Selector};

use crate::types::{DnsRecord, DomainDetails, RecordData, RecordType};

fn selector(css: &str) -> Selector {
    #[allow(clippy::expect_used)] // static selectors, checked by the test suite
    Selector::parse(css).expect("static selector")
}

// ============ Domain Listing ============

/// Extracts domain names from an account overview page, in document order.
///
/// Each listed domain links to its detail page; `detail_action` is the
/// `action` query value that marks those links (primary and secondary
/// domains use different actions on the same page).
pub(crate) fn parse_domain_list(html: &str, detail_action: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let anchors = selector("table a[href]");
    let marker = format!("action={detail_action}");

    doc.select(&anchors)
        .filter(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.contains(&marker))
        })
        .filter_map(|a| {
            let text: String = a.text().collect();
            let name = text.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

// ============ Domain Detail ============

/// Parses a primary-domain detail page into one record sequence per type.
pub(crate) fn parse_domain_details(html: &str) -> DomainDetails {
    let doc = Html::parse_document(html);
    DomainDetails {
        a: parse_record_table(&doc, RecordType::A),
        aaaa: parse_record_table(&doc, RecordType::Aaaa),
        mx: parse_record_table(&doc, RecordType::Mx),
        txt: parse_record_table(&doc, RecordType::Txt),
    }
}

/// Locates the table for one record type and maps its rows to records.
fn parse_record_table(doc: &Html, record_type: RecordType) -> Vec<DnsRecord> {
    let Some(table) = record_table(doc, record_type) else {
        return Vec::new();
    };

    let rows = selector("tr");
    let cells = selector("td");
    table
        .select(&rows)
        .filter_map(|row| {
            let row_cells: Vec<ElementRef<'_>> = row.select(&cells).collect();
            parse_record_row(&row_cells, record_type)
        })
        .collect()
}

/// Finds the record table for a type: the first `<table>` sibling after the
/// section heading `<h2>{TYPE} records</h2>`.
fn record_table<'a>(doc: &'a Html, record_type: RecordType) -> Option<ElementRef<'a>> {
    let headings = selector("h2");
    let wanted = format!("{} records", record_type.as_str());

    let heading = doc.select(&headings).find(|h| {
        let text: String = h.text().collect();
        text.trim().eq_ignore_ascii_case(&wanted)
    })?;

    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

/// Maps one table row to a record.
///
/// Cell order is fixed per type: A/AAAA are name, ip, ttl; MX is name,
/// exchanger, preference, ttl; TXT is name, txtdata, ttl. The trailing cell
/// holds the edit form/link. Header and filler rows have no `<td>` cells (or
/// too few) and are skipped.
fn parse_record_row(cells: &[ElementRef<'_>], record_type: RecordType) -> Option<DnsRecord> {
    let name = cell_text(*cells.first()?);
    if name.is_empty() {
        return None;
    }

    let (data, ttl_index) = match record_type {
        RecordType::A => (
            RecordData::A {
                ip: cell_text(*cells.get(1)?),
            },
            2,
        ),
        RecordType::Aaaa => (
            RecordData::AAAA {
                ip: cell_text(*cells.get(1)?),
            },
            2,
        ),
        RecordType::Mx => (
            RecordData::MX {
                exchanger: cell_text(*cells.get(1)?),
                preference: cell_text(*cells.get(2)?),
            },
            3,
        ),
        RecordType::Txt => (
            RecordData::TXT {
                txtdata: cell_text(*cells.get(1)?),
            },
            2,
        ),
    };

    let ttl = cells
        .get(ttl_index)
        .map(|cell| cell_text(*cell))
        .and_then(|text| text.parse().ok());
    let (id, domain) = cells
        .get(ttl_index + 1)
        .map_or((None, None), |cell| row_identity(*cell));

    Some(DnsRecord {
        id,
        domain,
        name,
        ttl,
        data,
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extracts the panel-assigned row identifier and owning domain from a row's
/// edit cell.
///
/// Newer panel pages embed an inline form with hidden `id`/`user_domain`
/// inputs; older ones use an edit link carrying the same values as query
/// parameters. Implicit rows (e.g. the synthesized localhost record) have
/// neither and yield `(None, None)`.
fn row_identity(cell: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let inputs = selector("form input");
    let mut id = None;
    let mut domain = None;

    for input in cell.select(&inputs) {
        let value = input.value().attr("value");
        match input.value().attr("name") {
            Some("id") => id = value.map(str::to_string),
            Some("user_domain") => domain = value.map(str::to_string),
            _ => {}
        }
    }
    if id.is_some() || domain.is_some() {
        return (id, domain);
    }

    let anchors = selector("a[href]");
    for anchor in cell.select(&anchors) {
        let Some(query) = anchor
            .value()
            .attr("href")
            .and_then(|href| href.split_once('?'))
            .map(|(_, query)| query)
        else {
            continue;
        };
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "id" => id = Some(value.into_owned()),
                "user_domain" => domain = Some(value.into_owned()),
                _ => {}
            }
        }
        if id.is_some() || domain.is_some() {
            break;
        }
    }
    (id, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_ACTION: &str = "dns_primary_changeDNSsetup";

    fn wrap(body: &str) -> String {
        format!("<html><body>{body}</body></html>")
    }

    // ============ Domain listing ============

    #[test]
    fn listing_yields_domains_in_document_order() {
        let html = wrap(
            r#"<table>
                 <tr><th>Domain</th></tr>
                 <tr><td><a href="?action=dns_primary_changeDNSsetup&user_domain=mytest.dk">mytest.dk</a></td></tr>
                 <tr><td><a href="?action=dns_primary_changeDNSsetup&user_domain=mytest2.dk">mytest2.dk</a></td></tr>
               </table>"#,
        );
        assert_eq!(
            parse_domain_list(&html, DETAIL_ACTION),
            vec!["mytest.dk".to_string(), "mytest2.dk".to_string()]
        );
    }

    #[test]
    fn listing_ignores_links_with_other_actions() {
        let html = wrap(
            r#"<table>
                 <tr><td><a href="?action=dns_secondary_changeDNSsetup&user_domain=other.dk">other.dk</a></td></tr>
                 <tr><td><a href="?action=logout">Log out</a></td></tr>
               </table>"#,
        );
        assert!(parse_domain_list(&html, DETAIL_ACTION).is_empty());
    }

    #[test]
    fn listing_without_matching_table_is_empty() {
        let html = wrap("<p>Ingen dom&aelig;ner</p>");
        assert!(parse_domain_list(&html, DETAIL_ACTION).is_empty());
    }

    // ============ Record tables ============

    fn a_table(body: &str) -> String {
        wrap(&format!("<h2>A records</h2><table>{body}</table>"))
    }

    #[test]
    fn a_row_with_edit_form_parses_fully() {
        let html = a_table(
            r#"<tr><th>Hostname</th><th>IP</th><th>TTL</th><th></th></tr>
               <tr>
                 <td>*.mytest.dk</td><td>1.2.3.4</td><td>43200</td>
                 <td><form method="post">
                   <input type="hidden" name="action" value="dns_primary_record_ask_a">
                   <input type="hidden" name="user_domain" value="mytest.dk">
                   <input type="hidden" name="id" value="42">
                   <input type="submit" value="Ret">
                 </form></td>
               </tr>"#,
        );
        let details = parse_domain_details(&html);
        assert_eq!(
            details.a,
            vec![DnsRecord {
                id: Some("42".to_string()),
                domain: Some("mytest.dk".to_string()),
                name: "*.mytest.dk".to_string(),
                ttl: Some(43200),
                data: RecordData::A {
                    ip: "1.2.3.4".to_string()
                },
            }]
        );
    }

    #[test]
    fn implicit_row_without_identity_parses_with_none() {
        let html = a_table(
            r#"<tr><td>localhost.mytest.dk</td><td>127.0.0.1</td><td>43200</td><td></td></tr>"#,
        );
        let details = parse_domain_details(&html);
        assert_eq!(details.a.len(), 1);
        assert_eq!(details.a[0].id, None);
        assert_eq!(details.a[0].domain, None);
        assert_eq!(details.a[0].name, "localhost.mytest.dk");
    }

    #[test]
    fn identity_from_edit_link_fallback() {
        let html = a_table(
            r#"<tr>
                 <td>mytest.dk</td><td>1.2.3.4</td><td>43200</td>
                 <td><a href="editdomains4.phtml?action=dns_primary_record_ask_a&user_domain=mytest.dk&id=17">Ret</a></td>
               </tr>"#,
        );
        let details = parse_domain_details(&html);
        assert_eq!(details.a[0].id.as_deref(), Some("17"));
        assert_eq!(details.a[0].domain.as_deref(), Some("mytest.dk"));
    }

    #[test]
    fn mx_row_parses_exchanger_and_preference() {
        let html = wrap(
            r#"<h2>MX records</h2>
               <table>
                 <tr>
                   <td>mytest.dk</td><td>mail.mytest.dk</td><td>10</td><td>43200</td>
                   <td><form><input type="hidden" name="user_domain" value="mytest.dk">
                       <input type="hidden" name="id" value="666"></form></td>
                 </tr>
               </table>"#,
        );
        let details = parse_domain_details(&html);
        assert_eq!(
            details.mx,
            vec![DnsRecord {
                id: Some("666".to_string()),
                domain: Some("mytest.dk".to_string()),
                name: "mytest.dk".to_string(),
                ttl: Some(43200),
                data: RecordData::MX {
                    exchanger: "mail.mytest.dk".to_string(),
                    preference: "10".to_string(),
                },
            }]
        );
    }

    #[test]
    fn unparseable_ttl_becomes_none() {
        let html = a_table(r#"<tr><td>mytest.dk</td><td>1.2.3.4</td><td>-</td><td></td></tr>"#);
        let details = parse_domain_details(&html);
        assert_eq!(details.a[0].ttl, None);
    }

    #[test]
    fn missing_tables_yield_empty_sequences() {
        let html = wrap("<h2>A records</h2><table></table>");
        let details = parse_domain_details(&html);
        assert!(details.is_empty());
        assert!(details.aaaa.is_empty());
        assert!(details.mx.is_empty());
        assert!(details.txt.is_empty());
    }

    #[test]
    fn rows_with_too_few_cells_are_skipped() {
        let html = wrap(
            r#"<h2>MX records</h2>
               <table>
                 <tr><td colspan="5">No mail exchangers configured</td></tr>
               </table>"#,
        );
        let details = parse_domain_details(&html);
        assert!(details.mx.is_empty());
    }

    #[test]
    fn tables_keep_document_order() {
        let html = wrap(
            r#"<h2>TXT records</h2>
               <table>
                 <tr><td>a.mytest.dk</td><td>first</td><td>43200</td><td></td></tr>
                 <tr><td>b.mytest.dk</td><td>second</td><td>43200</td><td></td></tr>
               </table>"#,
        );
        let details = parse_domain_details(&html);
        let values: Vec<&str> = details.txt.iter().map(|r| r.data.display_value()).collect();
        assert_eq!(values, vec!["first", "second"]);
    }
}
