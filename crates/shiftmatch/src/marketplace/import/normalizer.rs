/// Collapse runs of whitespace, strip a UTF-8 BOM, and trim the ends.
///
/// Case is preserved: the recommendation engine matches skills by exact
/// string equality, so the importer must not fold labels it did not receive.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `;`-separated skill list into normalized, de-duplicated labels,
/// preserving first-seen order.
pub(crate) fn split_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for part in raw.split(';') {
        let label = normalize_label(part);
        if label.is_empty() || skills.iter().any(|seen| seen == &label) {
            continue;
        }
        skills.push(label);
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_internal_whitespace_and_strips_bom() {
        assert_eq!(
            normalize_label("\u{feff}Cleaning  &   Maintenance "),
            "Cleaning & Maintenance"
        );
    }

    #[test]
    fn preserves_case() {
        assert_eq!(normalize_label("Ticket Handling"), "Ticket Handling");
    }

    #[test]
    fn splits_deduplicates_and_keeps_order() {
        let skills = split_skills("Ticket Handling; Data Entry ;Ticket Handling;;  ");
        assert_eq!(skills, vec!["Ticket Handling", "Data Entry"]);
    }
}
