/// Trait for deriving a player's avatar image URL from their name
pub trait AvatarLinkGenerator: Send + Sync {
    fn avatar_link(&self, player_name: &str) -> String;
}

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://avatars.dicebear.com/api/open-peeps";

/// DiceBear avatars seeded with the hex encoded UTF-8 bytes of the name
pub struct DiceBearAvatarLinks {
    base_url: String,
}

impl DiceBearAvatarLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DiceBearAvatarLinks {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL)
    }
}

impl AvatarLinkGenerator for DiceBearAvatarLinks {
    fn avatar_link(&self, player_name: &str) -> String {
        format!("{}/{}.svg", self.base_url, hex::encode(player_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_link_uses_hex_seed() {
        let links = DiceBearAvatarLinks::default();
        assert_eq!(
            links.avatar_link("Bob"),
            "https://avatars.dicebear.com/api/open-peeps/426f62.svg"
        );
    }

    #[test]
    fn test_avatar_link_trims_trailing_slash() {
        let links = DiceBearAvatarLinks::new("http://localhost/avatars/");
        assert_eq!(links.avatar_link("a1"), "http://localhost/avatars/6131.svg");
    }
}
