//! GratisDNS panel client.

use crate::error::{GratisDnsError, Result};
use crate::http::Panel;
use crate::scrape;
use crate::types::{DnsRecord, DomainDetails};

/// The panel's single backend endpoint; every operation is a GET or POST
/// against this URL with an `action` parameter.
pub const BACKEND_URL: &str = "https://admin.gratisdns.com/editdomains4.phtml";

const ACTION_LOGIN: &str = "logmein";
const ACTION_PRIMARY_LIST: &str = "dns_primarydns";
const ACTION_SECONDARY_LIST: &str = "dns_secondarydns";
const ACTION_PRIMARY_DETAILS: &str = "dns_primary_changeDNSsetup";
const ACTION_SECONDARY_DETAILS: &str = "dns_secondary_changeDNSsetup";

/// Authenticated GratisDNS panel session.
///
/// Authentication happens once, at [`login`](Self::login); the session
/// cookie is assumed valid for the lifetime of the value, there is no
/// re-login or expiry handling. The client holds no other state: every call
/// is one HTTP round trip, nothing is cached, and callers must re-fetch to
/// observe committed changes.
pub struct GratisDns {
    panel: Panel,
}

impl GratisDns {
    /// Logs in against [`BACKEND_URL`] and returns an authenticated client.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the panel rejects the login (it answers
    /// with the login form again); transport variants for network failures.
    pub async fn login(username: &str, password: &str) -> Result<Self> {
        Self::login_with_backend(BACKEND_URL, username, password).await
    }

    /// Like [`login`](Self::login), but against an explicit backend URL.
    /// Intended for tests and panel mirrors.
    pub async fn login_with_backend(
        backend_url: impl Into<String>,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let panel = Panel::new(backend_url.into())?;
        let body = panel
            .post_form(&[
                ("action", ACTION_LOGIN),
                ("login", username),
                ("password", password),
            ])
            .await?;

        if is_login_page(&body) {
            log::warn!("Panel rejected login for user '{username}'");
            return Err(GratisDnsError::InvalidCredentials { raw_message: None });
        }
        Ok(Self { panel })
    }

    /// Lists the account's primary domains in document order. An account
    /// without primary domains yields an empty list.
    pub async fn get_primary_domains(&self) -> Result<Vec<String>> {
        let body = self.page(&[("action", ACTION_PRIMARY_LIST)]).await?;
        Ok(scrape::parse_domain_list(&body, ACTION_PRIMARY_DETAILS))
    }

    /// Lists the account's secondary domains in document order.
    pub async fn get_secondary_domains(&self) -> Result<Vec<String>> {
        let body = self.page(&[("action", ACTION_SECONDARY_LIST)]).await?;
        Ok(scrape::parse_domain_list(&body, ACTION_SECONDARY_DETAILS))
    }

    /// Fetches and parses the detail page of a primary domain.
    ///
    /// The result always carries all four record sequences (A, AAAA, MX,
    /// TXT), each possibly empty, each in document order. Records are
    /// parsed fresh on every call.
    pub async fn get_primary_domain_details(&self, domain: &str) -> Result<DomainDetails> {
        let body = self
            .page(&[
                ("action", ACTION_PRIMARY_DETAILS),
                ("user_domain", domain),
            ])
            .await?;
        Ok(scrape::parse_domain_details(&body))
    }

    /// Pushes a record's current state to the panel via its type's update
    /// form.
    ///
    /// One POST, no retry, nothing returned: re-fetch the detail page to
    /// observe the committed state.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the record has no row identifier (it was
    /// never scraped from a detail page); transport and authentication
    /// variants otherwise.
    pub async fn update_record(&self, record: &DnsRecord) -> Result<()> {
        let payload = record.update_payload()?;
        let body = self.panel.post_form(&payload).await?;
        self.ensure_session(&body)?;
        Ok(())
    }

    /// GETs a panel page and rejects responses that turn out to be the
    /// login page (expired session).
    async fn page(&self, query: &[(&str, &str)]) -> Result<String> {
        let body = self.panel.get(query).await?;
        self.ensure_session(&body)?;
        Ok(body)
    }

    fn ensure_session(&self, body: &str) -> Result<()> {
        if is_login_page(body) {
            log::warn!("Panel answered with the login page; session no longer valid");
            return Err(GratisDnsError::InvalidCredentials {
                raw_message: Some("session expired: panel answered with the login page".to_string()),
            });
        }
        Ok(())
    }
}

/// The panel signals a missing or rejected session by rendering the login
/// form instead of the requested page.
fn is_login_page(body: &str) -> bool {
    body.contains("name=\"password\"") || body.contains("name='password'")
}
