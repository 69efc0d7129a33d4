//! Line parser for ProcessPro permission export files.
//!
//! Exports are semi-structured text. The lines that matter look like this:
//!
//! ```text
//! User = jsmith
//!
//! Company: Acme Industrial
//! AP100  Invoice Entry          <All>
//! AR200  Cash Receipts          <All>
//! GL300  Journal Posting        <None>
//! Company: Acme Retail
//! AP100  Invoice Entry          <All>
//! ```
//!
//! A `User =` line names the exported user. A `Company:` line opens a company
//! section; every following row whose access column reads `<All>` grants the
//! process named by the row's first token to that company. Everything else
//! (headers, column legends, `<None>` rows, blanks) is ignored -- the parser
//! is best-effort and never fails on content.

use tracing::{debug, warn};

use crate::models::PermissionExport;

/// Substring identifying the username line.
const USER_MARKER: &str = "User =";

/// Prefix identifying a company section line.
const COMPANY_PREFIX: &str = "Company:";

/// Marker identifying a granted-permission row.
const GRANT_MARKER: &str = "<All>";

/// Parse permission export content into a [`PermissionExport`].
///
/// Matching is pure substring/token work and checked in this order: a line
/// containing `User =` sets the username (last occurrence wins); a line
/// starting with `Company:` selects the current company, creating an empty
/// entry for it if new; a line containing `<All>` adds its first
/// whitespace-delimited token to the current company's permission set. Grant
/// rows seen before any `Company:` line have nowhere to go and are dropped.
pub fn parse_export(content: &str) -> PermissionExport {
    debug!(bytes = content.len(), "parsing permission export");

    let mut export = PermissionExport::default();
    let mut current_company: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.contains(USER_MARKER) {
            // Everything between the first and second '=' is the username.
            if let Some(name) = line.split('=').nth(1) {
                let name = name.trim();
                debug!(username = name, "found username");
                export.username = Some(name.to_string());
            }
        } else if let Some(rest) = line.strip_prefix(COMPANY_PREFIX) {
            let company = rest.trim();
            debug!(company = company, "entering company section");
            export.companies.entry(company.to_string()).or_default();
            current_company = Some(company.to_string());
        } else if line.contains(GRANT_MARKER) {
            match current_company.as_deref() {
                Some(company) => {
                    if let Some(process) = line.split_whitespace().next() {
                        export
                            .companies
                            .entry(company.to_string())
                            .or_default()
                            .insert(process.to_string());
                    }
                }
                None => {
                    warn!(line = line, "grant row before any company section, dropping");
                }
            }
        }
    }

    debug!(
        companies = export.companies.len(),
        permissions = export.total_permissions(),
        "parsed permission export"
    );
    export
}
