use ratatui::style::Color;

pub const BASE_CLASS: &str = "team-matches-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub token: &'static str,
    pub accent: Color,
}

pub static KNOWN_TEAMS: [TeamInfo; 8] = [
    TeamInfo {
        code: "RCB",
        name: "Royal Challengers Bangalore",
        token: "rcb",
        accent: Color::Red,
    },
    TeamInfo {
        code: "KKR",
        name: "Kolkata Knight Riders",
        token: "kkr",
        accent: Color::Magenta,
    },
    TeamInfo {
        code: "KXP",
        name: "Kings XI Punjab",
        token: "kxp",
        accent: Color::LightRed,
    },
    TeamInfo {
        code: "CSK",
        name: "Chennai Super Kings",
        token: "csk",
        accent: Color::Yellow,
    },
    TeamInfo {
        code: "RR",
        name: "Rajasthan Royals",
        token: "rr",
        accent: Color::LightMagenta,
    },
    TeamInfo {
        code: "MI",
        name: "Mumbai Indians",
        token: "mi",
        accent: Color::Blue,
    },
    TeamInfo {
        code: "SH",
        name: "Sunrisers Hyderabad",
        token: "srh",
        accent: Color::LightYellow,
    },
    TeamInfo {
        code: "DC",
        name: "Delhi Capitals",
        token: "dc",
        accent: Color::LightBlue,
    },
];

pub fn team_info(code: &str) -> Option<&'static TeamInfo> {
    KNOWN_TEAMS.iter().find(|t| t.code == code)
}

/// Team-specific style token; unknown codes get none.
pub fn route_class_name(code: &str) -> &'static str {
    team_info(code).map(|t| t.token).unwrap_or("")
}

pub fn container_class(code: &str) -> String {
    format!("{BASE_CLASS} {}", route_class_name(code))
}

pub fn accent_color(code: &str) -> Color {
    team_info(code).map(|t| t.accent).unwrap_or(Color::Cyan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunrisers_use_srh_token() {
        assert_eq!(route_class_name("SH"), "srh");
        assert_eq!(route_class_name("SRH"), "");
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(route_class_name("rcb"), "");
        assert_eq!(accent_color("rcb"), Color::Cyan);
    }
}
