/// Turn a role name into a username suffix.
///
/// Every whitespace or hyphen character becomes a `.`, one for one, so
/// consecutive separators are not collapsed.
pub fn role_suffix(role: &str) -> String {
    role.chars()
        .map(|c| if c.is_whitespace() || c == '-' { '.' } else { c })
        .collect()
}

/// Username synthesized for `role`: `<prefix>.<role_suffix(role)>`.
pub fn synthesize_username(prefix: &str, role: &str) -> String {
    format!("{}.{}", prefix, role_suffix(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_single_word() {
        assert_eq!(role_suffix("editor"), "editor");
    }

    #[test]
    fn suffix_spaces_and_hyphens() {
        assert_eq!(role_suffix("high-level administrator"), "high.level.administrator");
    }

    #[test]
    fn suffix_does_not_collapse_runs() {
        assert_eq!(role_suffix("a  b"), "a..b");
        assert_eq!(role_suffix("a -b"), "a..b");
    }

    #[test]
    fn suffix_tabs_count_as_whitespace() {
        assert_eq!(role_suffix("site\tadmin"), "site.admin");
    }

    #[test]
    fn username_joins_prefix() {
        assert_eq!(synthesize_username("test", "forum moderator"), "test.forum.moderator");
        assert_eq!(synthesize_username("qa.bot", "editor"), "qa.bot.editor");
    }
}
