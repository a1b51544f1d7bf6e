//! Intent categories answered by the rule table.

use strum::{Display, EnumIter, IntoStaticStr};

use super::pools::{self, ReplyPool};

/// Category of a reply, one per rule plus the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    LuluKutu,
    Greeting,
    Farewell,
    Thanks,
    HowAreYou,
    Name,
    Help,
    Weather,
    Time,
    Date,
    /// Nothing matched
    Default,
}

impl Intent {
    /// Whether this intent belongs to the optional weather/time/date keyword group.
    #[must_use]
    pub fn is_keyword_trigger(self) -> bool {
        matches!(self, Intent::Weather | Intent::Time | Intent::Date)
    }

    /// Canned replies for this intent. `None` for intents answered with a computed string.
    #[must_use]
    pub fn pool(self) -> Option<&'static ReplyPool> {
        match self {
            Intent::LuluKutu => Some(&pools::LULU_KUTU),
            Intent::Greeting => Some(&pools::GREETINGS),
            Intent::Farewell => Some(&pools::FAREWELL),
            Intent::Thanks => Some(&pools::THANKS),
            Intent::HowAreYou => Some(&pools::HOW_ARE_YOU),
            Intent::Name => Some(&pools::NAME),
            Intent::Help => Some(&pools::HELP),
            Intent::Weather => Some(&pools::WEATHER),
            Intent::Default => Some(&pools::DEFAULT_POOL),
            Intent::Time | Intent::Date => None,
        }
    }
}
