use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Extracts the invite code out of every invite link in the message.
pub fn get_invite_codes(msg: &str) -> Vec<String> {
    INVITE_MATCHER
        .captures_iter(msg)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Reads a channel out of either a ``<#id>`` mention or a plain id.
pub fn extract_channel_id(input: &str) -> Option<u64> {
    if let Some(captures) = CHANNEL_ID_MATCHER.captures(input) {
        return captures[1].parse().ok();
    }
    input.parse().ok()
}

lazy_static! {
    static ref CHANNEL_ID_MATCHER: Regex = {
        Regex::new(r"<#([0-9]+)>").unwrap()
    };
}

lazy_static! {
    static ref INVITE_MATCHER: Regex = {
        // No look-around in the regex crate, so the code group is a plain word class.
        RegexBuilder::new(r"(?:https?://)?(?:www\.)?(?:discord(?:\.| |\[?\(?'?'?dot'?'?\)?\]?)?(?:gg|io|me|li)|discordapp\.com/invite)/+([\w-]+)")
            .case_insensitive(true)
            .build()
            .unwrap()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_code_extraction_works() {
        let msg = "come join us over at https://discord.gg/vddW3D9";
        let msg_2 = "discord.gg/vddW3D9";
        let msg_3 = "https://discordapp.com/invite/vddW3D9";
        let control = "we don't do invites here";

        assert_eq!(get_invite_codes(msg), vec!["vddW3D9"]);
        assert_eq!(get_invite_codes(msg_2), vec!["vddW3D9"]);
        assert_eq!(get_invite_codes(msg_3), vec!["vddW3D9"]);
        assert!(get_invite_codes(control).is_empty());
    }

    #[test]
    fn multiple_invites_are_all_found() {
        let msg = "https://discord.gg/first and also discord.gg/second";

        assert_eq!(get_invite_codes(msg), vec!["first", "second"]);
    }

    #[test]
    fn channel_id_extraction_works() {
        assert_eq!(extract_channel_id("<#701211676032323584>"), Some(701211676032323584));
        assert_eq!(extract_channel_id("701211676032323584"), Some(701211676032323584));
        assert_eq!(extract_channel_id("general"), None);
    }
}
