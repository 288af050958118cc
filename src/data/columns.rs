// ---------------------------------------------------------------------------
// Column roles resolved from header names
// ---------------------------------------------------------------------------

/// A header that was resolved for a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub index: usize,
}

/// Class, heart-rate and QRS columns of a dataset, each possibly absent.
///
/// Computed once per load by [`ColumnRoles::infer`] and handed to every
/// component that reads these columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub class: Option<ColumnRef>,
    pub heart_rate: Option<ColumnRef>,
    pub qrs: Option<ColumnRef>,
}

impl ColumnRoles {
    /// First header (in header order) matching each role's keywords,
    /// compared case-insensitively.
    pub fn infer(headers: &[String]) -> Self {
        Self {
            class: first_match(headers, is_class_header),
            heart_rate: first_match(headers, is_heart_rate_header),
            qrs: first_match(headers, is_qrs_header),
        }
    }

    pub fn class_index(&self) -> Option<usize> {
        self.class.as_ref().map(|c| c.index)
    }

    pub fn heart_rate_index(&self) -> Option<usize> {
        self.heart_rate.as_ref().map(|c| c.index)
    }

    pub fn qrs_index(&self) -> Option<usize> {
        self.qrs.as_ref().map(|c| c.index)
    }
}

fn first_match(headers: &[String], pred: fn(&str) -> bool) -> Option<ColumnRef> {
    headers
        .iter()
        .enumerate()
        .find(|(_, h)| pred(&h.to_lowercase()))
        .map(|(index, h)| ColumnRef {
            name: h.clone(),
            index,
        })
}

fn is_class_header(lower: &str) -> bool {
    lower.contains("class") || lower.contains("target") || lower == "label" || lower == "type"
}

fn is_heart_rate_header(lower: &str) -> bool {
    lower.contains("heart") || lower.contains("rate") || lower.contains("hr")
}

fn is_qrs_header(lower: &str) -> bool {
    lower.contains("qrs")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_typical_ecg_headers() {
        let roles = ColumnRoles::infer(&headers(&[
            "Heart_Rate",
            "RR_Mean",
            "QRS_Duration",
            "Label",
        ]));
        assert_eq!(roles.heart_rate.as_ref().unwrap().name, "Heart_Rate");
        assert_eq!(roles.qrs_index(), Some(2));
        assert_eq!(roles.class.unwrap().name, "Label");
    }

    #[test]
    fn label_and_type_need_exact_match() {
        let roles = ColumnRoles::infer(&headers(&["label_id", "types", "TYPE"]));
        assert_eq!(roles.class_index(), Some(2));
    }

    #[test]
    fn class_substrings_match_anywhere() {
        let roles = ColumnRoles::infer(&headers(&["id", "Target_Var", "subclass"]));
        assert_eq!(roles.class.unwrap().name, "Target_Var");
    }

    #[test]
    fn first_matching_header_wins() {
        // "Sample_Rate" contains "rate" and precedes the actual heart rate.
        let roles = ColumnRoles::infer(&headers(&["Sample_Rate", "HR"]));
        assert_eq!(roles.heart_rate.unwrap().name, "Sample_Rate");
    }

    #[test]
    fn missing_roles_are_absent() {
        let roles = ColumnRoles::infer(&headers(&["a", "b"]));
        assert_eq!(roles, ColumnRoles::default());
        assert_eq!(roles.heart_rate_index(), None);
    }
}
