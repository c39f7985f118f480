//! Static registry of the query capabilities offered by [`IssTracker`](crate::tracker::IssTracker),
//! used to render the help listing.

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Method of [`IssTracker`](crate::tracker::IssTracker) serving the capability
    pub name: &'static str,
    /// Conventional route for an HTTP front-end
    pub route: &'static str,
    pub description: &'static str,
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        name: "help",
        route: "GET /help",
        description: "List every capability of the tracker with a short description.",
    },
    Capability {
        name: "all_data",
        route: "GET /",
        description: "Every state vector of the loaded ephemeris.",
    },
    Capability {
        name: "epochs",
        route: "GET /epochs?offset=<int>&limit=<int>",
        description: "Epoch timestamps keyed by 1-based position. `offset` (default 0) skips \
                      leading epochs, `limit` (default: all remaining) bounds the count.",
    },
    Capability {
        name: "epoch",
        route: "GET /epochs/<epoch>",
        description: "Full state vector (position and velocity) of the epoch at a 0-based position.",
    },
    Capability {
        name: "epoch_position",
        route: "GET /epochs/<epoch>/position",
        description: "X, Y, Z position in kilometers of the epoch at a 0-based position.",
    },
    Capability {
        name: "epoch_speed",
        route: "GET /epochs/<epoch>/speed",
        description: "Instantaneous speed in km/s of the epoch at a 0-based position.",
    },
    Capability {
        name: "epoch_location",
        route: "GET /epochs/<epoch>/location",
        description: "Latitude, longitude, altitude and place name of the epoch at a 0-based position.",
    },
    Capability {
        name: "now",
        route: "GET /now",
        description: "Epoch closest to the current time with its time offset, location, place name \
                      and speed.",
    },
    Capability {
        name: "load",
        route: "POST /post-data",
        description: "Fetch the ephemeris feed and replace the loaded data.",
    },
    Capability {
        name: "unload",
        route: "DELETE /delete-data",
        description: "Discard the loaded data.",
    },
    Capability {
        name: "header",
        route: "GET /header",
        description: "Header block of the ephemeris.",
    },
    Capability {
        name: "metadata",
        route: "GET /metadata",
        description: "Metadata block of the ephemeris.",
    },
    Capability {
        name: "comments",
        route: "GET /comment",
        description: "Free-text comments of the ephemeris.",
    },
];

pub fn find(name: &str) -> Option<&'static Capability> {
    CAPABILITIES.iter().find(|c| c.name == name)
}

/// Render the help listing.
pub fn help_text() -> String {
    let body = CAPABILITIES
        .iter()
        .map(|c| format!("{} ({}):\n    {}", c.name, c.route, c.description))
        .join("\n\n");
    format!("\nCapabilities of the ISS tracker:\n\n{body}\n")
}

#[cfg(test)]
mod capabilities_test {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        assert_eq!(
            CAPABILITIES.iter().map(|c| c.name).unique().count(),
            CAPABILITIES.len()
        );
    }

    #[test]
    fn test_help_text_lists_everything() {
        let help = help_text();
        for capability in CAPABILITIES {
            assert!(help.contains(capability.name));
            assert!(help.contains(capability.route));
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("now").map(|c| c.route), Some("GET /now"));
        assert!(find("get_nasa_data").is_none());
    }
}
