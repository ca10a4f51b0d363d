//! Header-based protection signs: `[Private]` on the first line, names below.

use lockstone_finder::SignParser;
use lockstone_geom::BlockPos;
use lockstone_world::SignRef;

use crate::config::HeaderConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignKind {
    Private,
    MoreUsers,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProtectionSign {
    pub pos: BlockPos,
    pub kind: SignKind,
    pub names: Vec<String>,
}

impl ProtectionSign {
    /// First name on a `[Private]` sign.
    pub fn owner(&self) -> Option<&str> {
        match self.kind {
            SignKind::Private => self.names.first().map(|s| s.as_str()),
            SignKind::MoreUsers => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeaderSignParser {
    private: String,
    more_users: String,
}

impl HeaderSignParser {
    pub fn new(headers: &HeaderConfig) -> Self {
        Self {
            private: headers.private.trim().to_lowercase(),
            more_users: headers.more_users.trim().to_lowercase(),
        }
    }

    fn kind_of(&self, header: &str) -> Option<SignKind> {
        let header = header.trim().to_lowercase();
        if header == self.private {
            Some(SignKind::Private)
        } else if header == self.more_users {
            Some(SignKind::MoreUsers)
        } else {
            None
        }
    }

    /// Interprets raw sign lines found at `pos`.
    pub fn parse_lines(&self, pos: BlockPos, lines: &[String]) -> Option<ProtectionSign> {
        let (header, rest) = lines.split_first()?;
        let kind = self.kind_of(header)?;
        let names = rest
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Some(ProtectionSign { pos, kind, names })
    }
}

impl Default for HeaderSignParser {
    fn default() -> Self {
        Self::new(&HeaderConfig::default())
    }
}

impl SignParser for HeaderSignParser {
    type Sign = ProtectionSign;

    fn parse_sign(&self, sign: &SignRef<'_>) -> Option<ProtectionSign> {
        self.parse_lines(sign.pos(), sign.lines())
    }
}
