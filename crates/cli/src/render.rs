//! Terminal rendering for permission exports.
//!
//! The single-file view is an indented tree; the two-file view is a
//! side-by-side table over the union of both users' companies. Both render
//! from plain `CompanyMap`s so the same code serves full and unique-only
//! output.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use permcmp_core::config::ColorMode;
use permcmp_core::{CompanyMap, UserSlot};

/// Pane title for one user: `<username>'s Permissions`, falling back to the
/// slot's default label when the export carried no username.
pub fn pane_title(username: Option<&str>, slot: UserSlot) -> String {
    format!("{}'s Permissions", username.unwrap_or(slot.default_label()))
}

/// Render one companies-map as an indented tree under an underlined title.
pub fn tree(title: &str, companies: &CompanyMap, show_empty: bool) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"═".repeat(title.chars().count()));
    out.push('\n');

    let mut shown = 0;
    for (company, perms) in companies {
        if perms.is_empty() && !show_empty {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("{} ({})\n", company, perms.len()));
        for perm in perms {
            out.push_str(&format!("    {}\n", perm));
        }
        shown += 1;
    }

    if shown == 0 {
        out.push_str("\n(no permissions)\n");
    }

    out
}

/// Build the side-by-side comparison table.
///
/// Each row is one company from the union of both views; a blank cell means
/// that user has no entry for the company. With `show_empty` off, companies
/// with an empty displayed set are blanked per side and rows that would be
/// blank on both sides are dropped.
pub fn compare_table(
    title1: &str,
    view1: &CompanyMap,
    title2: &str,
    view2: &CompanyMap,
    show_empty: bool,
    color: ColorMode,
) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    match color {
        ColorMode::Always => {
            table.enforce_styling();
        }
        ColorMode::Never => {
            table.force_no_tty();
        }
        ColorMode::Auto => {}
    }
    table.set_header(vec![
        Cell::new(title1).fg(comfy_table::Color::Blue),
        Cell::new(title2).fg(comfy_table::Color::Green),
    ]);

    for company in company_union(view1, view2) {
        let left = company_cell(company, view1, show_empty);
        let right = company_cell(company, view2, show_empty);
        if left.is_none() && right.is_none() {
            continue;
        }
        table.add_row(vec![
            Cell::new(left.unwrap_or_default()),
            Cell::new(right.unwrap_or_default()),
        ]);
    }

    table
}

/// Sorted union of the company names in both views.
fn company_union<'a>(a: &'a CompanyMap, b: &'a CompanyMap) -> Vec<&'a str> {
    let mut names: Vec<&str> = a.keys().map(String::as_str).collect();
    names.extend(b.keys().map(String::as_str));
    names.sort_unstable();
    names.dedup();
    names
}

/// Cell text for one company on one side, or `None` when there is nothing to
/// show there.
fn company_cell(company: &str, view: &CompanyMap, show_empty: bool) -> Option<String> {
    let perms = view.get(company)?;
    if perms.is_empty() && !show_empty {
        return None;
    }

    let mut cell = format!("{} ({})", company, perms.len());
    for perm in perms {
        cell.push_str("\n  ");
        cell.push_str(perm);
    }
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies(entries: &[(&str, &[&str])]) -> CompanyMap {
        entries
            .iter()
            .map(|(company, perms)| {
                (
                    company.to_string(),
                    perms.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_pane_title_uses_username() {
        assert_eq!(
            pane_title(Some("alice"), UserSlot::One),
            "alice's Permissions"
        );
    }

    #[test]
    fn test_pane_title_falls_back_to_slot_label() {
        assert_eq!(pane_title(None, UserSlot::One), "User 1's Permissions");
        assert_eq!(pane_title(None, UserSlot::Two), "User 2's Permissions");
    }

    #[test]
    fn test_tree_lists_companies_with_counts() {
        let map = companies(&[("Acme", &["AP100", "AP200"]), ("Globex", &["IN100"])]);
        let out = tree("alice's Permissions", &map, true);

        assert!(out.starts_with("alice's Permissions\n"));
        assert!(out.contains("Acme (2)\n    AP100\n    AP200\n"));
        assert!(out.contains("Globex (1)\n    IN100\n"));
    }

    #[test]
    fn test_tree_hides_empty_companies_when_asked() {
        let map = companies(&[("Acme", &["AP100"]), ("Empty Co", &[])]);

        let shown = tree("t", &map, true);
        assert!(shown.contains("Empty Co (0)"));

        let hidden = tree("t", &map, false);
        assert!(!hidden.contains("Empty Co"));
        assert!(hidden.contains("Acme (1)"));
    }

    #[test]
    fn test_tree_placeholder_for_no_permissions() {
        let out = tree("t", &CompanyMap::new(), true);
        assert!(out.contains("(no permissions)"));
    }

    #[test]
    fn test_company_cell_blank_rules() {
        let map = companies(&[("Acme", &["AP100"]), ("Empty Co", &[])]);

        assert!(company_cell("Acme", &map, true).is_some());
        assert_eq!(
            company_cell("Empty Co", &map, true).as_deref(),
            Some("Empty Co (0)")
        );
        assert!(company_cell("Empty Co", &map, false).is_none());
        assert!(company_cell("Missing", &map, true).is_none());
    }

    #[test]
    fn test_company_union_is_sorted_and_deduped() {
        let a = companies(&[("Globex", &["x"]), ("Acme", &["y"])]);
        let b = companies(&[("Acme", &["y"]), ("Initech", &["z"])]);
        assert_eq!(company_union(&a, &b), vec!["Acme", "Globex", "Initech"]);
    }

    #[test]
    fn test_compare_table_includes_both_sides() {
        let a = companies(&[("Acme", &["AP100"])]);
        let b = companies(&[("Initech", &["OE100"])]);
        let table = compare_table("alice", &a, "bob", &b, true, ColorMode::Never);
        let out = table.to_string();

        assert!(out.contains("alice"));
        assert!(out.contains("bob"));
        assert!(out.contains("Acme (1)"));
        assert!(out.contains("Initech (1)"));
        assert!(out.contains("AP100"));
        assert!(out.contains("OE100"));
    }

    #[test]
    fn test_compare_table_drops_fully_empty_rows() {
        // Both sides have an empty set for "Same Co" after a unique-only
        // compare; with show_empty off the row disappears entirely.
        let a = companies(&[("Same Co", &[]), ("Acme", &["AP100"])]);
        let b = companies(&[("Same Co", &[])]);

        let table = compare_table("alice", &a, "bob", &b, false, ColorMode::Never);
        let out = table.to_string();
        assert!(!out.contains("Same Co"));
        assert!(out.contains("Acme (1)"));
    }
}
