use serde::Deserialize;

/// Raw `/get_wizard_status` payload. Every field is optional on the wire;
/// a payload missing `name` or `health` does not produce a status update.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    pub name: Option<String>,
    pub health: Option<f32>,
    #[serde(default)]
    pub game_over: bool,
}

impl StatusPayload {
    pub fn into_status(self) -> Option<WizardStatus> {
        match (self.name, self.health) {
            (Some(name), Some(health)) => Some(WizardStatus {
                name,
                health: health.round() as i32,
                game_over: self.game_over,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardStatus {
    pub name: String,
    pub health: i32,
    pub game_over: bool,
}

impl WizardStatus {
    /// Health clamped to the displayable range. The server owns the real
    /// value; the bar never renders outside [0, 100].
    pub fn display_health(&self) -> i32 {
        self.health.clamp(0, 100)
    }

    pub fn band(&self) -> HealthBand {
        HealthBand::of(self.display_health())
    }
}

/// Color band for the health bar. Boundaries are inclusive on the low
/// side: exactly 60 is Warning, exactly 30 is Danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Success,
    Warning,
    Danger,
}

impl HealthBand {
    pub fn of(health: i32) -> Self {
        if health > 60 {
            HealthBand::Success
        } else if health > 30 {
            HealthBand::Warning
        } else {
            HealthBand::Danger
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(HealthBand::of(100), HealthBand::Success);
        assert_eq!(HealthBand::of(61), HealthBand::Success);
        assert_eq!(HealthBand::of(60), HealthBand::Warning);
        assert_eq!(HealthBand::of(31), HealthBand::Warning);
        assert_eq!(HealthBand::of(30), HealthBand::Danger);
        assert_eq!(HealthBand::of(0), HealthBand::Danger);
    }

    #[test]
    fn health_is_clamped_for_display() {
        let status = WizardStatus {
            name: "Merlin".into(),
            health: 130,
            game_over: false,
        };
        assert_eq!(status.display_health(), 100);
        assert_eq!(status.band(), HealthBand::Success);

        let status = WizardStatus {
            name: "Merlin".into(),
            health: -5,
            game_over: false,
        };
        assert_eq!(status.display_health(), 0);
        assert_eq!(status.band(), HealthBand::Danger);
    }

    #[test]
    fn payload_needs_name_and_health() {
        let full: StatusPayload =
            serde_json::from_str(r#"{"name":"Merlin","health":100,"game_over":false}"#).unwrap();
        let status = full.into_status().unwrap();
        assert_eq!(status.name, "Merlin");
        assert_eq!(status.health, 100);

        let empty: StatusPayload = serde_json::from_str("{}").unwrap();
        assert!(empty.into_status().is_none());

        let name_only: StatusPayload = serde_json::from_str(r#"{"name":"Merlin"}"#).unwrap();
        assert!(name_only.into_status().is_none());

        let health_only: StatusPayload = serde_json::from_str(r#"{"health":42}"#).unwrap();
        assert!(health_only.into_status().is_none());
    }

    #[test]
    fn game_over_defaults_to_false() {
        let payload: StatusPayload =
            serde_json::from_str(r#"{"name":"Merlin","health":0}"#).unwrap();
        assert!(!payload.into_status().unwrap().game_over);
    }
}
