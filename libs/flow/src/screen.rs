use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four nodes of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScreenId {
    #[serde(rename = "splash_screen")]
    Splash,
    #[serde(rename = "onboarding1")]
    Onboarding1,
    #[serde(rename = "onboarding2")]
    Onboarding2,
    #[serde(rename = "onboarding3")]
    Onboarding3,
}

impl ScreenId {
    pub const ALL: [ScreenId; 4] = [
        ScreenId::Splash,
        ScreenId::Onboarding1,
        ScreenId::Onboarding2,
        ScreenId::Onboarding3,
    ];

    pub const ONBOARDING: [ScreenId; 3] = [
        ScreenId::Onboarding1,
        ScreenId::Onboarding2,
        ScreenId::Onboarding3,
    ];

    /// Route name used by the nav host and the `--start` flag.
    pub fn route(self) -> &'static str {
        match self {
            ScreenId::Splash => "splash_screen",
            ScreenId::Onboarding1 => "onboarding1",
            ScreenId::Onboarding2 => "onboarding2",
            ScreenId::Onboarding3 => "onboarding3",
        }
    }

    pub fn is_onboarding(self) -> bool {
        !matches!(self, ScreenId::Splash)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for ScreenId {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ScreenId::ALL
            .into_iter()
            .find(|id| id.route().eq_ignore_ascii_case(needle))
            .ok_or_else(|| FlowError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_from_str() {
        for id in ScreenId::ALL {
            assert_eq!(id.route().parse::<ScreenId>(), Ok(id));
        }
    }

    #[test]
    fn route_parsing_ignores_case_and_padding() {
        assert_eq!(" Onboarding2 ".parse::<ScreenId>(), Ok(ScreenId::Onboarding2));
        assert_eq!("SPLASH_SCREEN".parse::<ScreenId>(), Ok(ScreenId::Splash));
    }

    #[test]
    fn unknown_route_is_rejected() {
        assert_eq!(
            "onboarding4".parse::<ScreenId>(),
            Err(FlowError::UnknownRoute("onboarding4".to_string()))
        );
    }

    #[test]
    fn only_splash_is_not_an_onboarding_page() {
        assert!(!ScreenId::Splash.is_onboarding());
        assert!(ScreenId::ONBOARDING.iter().all(|id| id.is_onboarding()));
    }
}
