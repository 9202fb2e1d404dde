use serde::{Deserialize, Serialize};

/// Criteria for the doctor directory. `None` (or a blank value) means "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorFilter {
    pub name: Option<String>,
    /// Half of the day the doctor is available in, `AM` or `PM`.
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Builds a filter from raw form values; blank inputs become "any".
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs_mean_unfiltered() {
        assert!(DoctorFilter::from_inputs("", " ", "").is_unfiltered());
        assert!(DoctorFilter::default().is_unfiltered());
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let filter = DoctorFilter::from_inputs("  Grey ", "AM", "");
        assert_eq!(filter.name.as_deref(), Some("Grey"));
        assert_eq!(filter.time.as_deref(), Some("AM"));
        assert!(filter.specialty.is_none());
        assert!(!filter.is_unfiltered());
    }
}
