use super::record::{Importance, SubmissionRecord, TextField, SATISFACTION_DEFAULT};

/// Every answerable field: thirteen text inputs plus phone digits,
/// importance, satisfaction and the newsletter box.
pub const TOTAL_FIELDS: usize = 17;

const TEXT_FIELDS: [TextField; 13] = [
    TextField::Name,
    TextField::Email,
    TextField::DialCode,
    TextField::Feedback,
    TextField::CommunityFeatures,
    TextField::Communities,
    TextField::InteractionFeatures,
    TextField::PrivacyFeatures,
    TextField::UxFeatures,
    TextField::ContentConsumption,
    TextField::OrganizingFeatures,
    TextField::Motivations,
    TextField::AdditionalComments,
];

/// Counts fields holding something other than their blank default.
///
/// `importance` only counts when it is not `Medium`, even if the user picked
/// `Medium` on purpose: the default and the sentinel are the same value.
pub fn filled_fields(record: &SubmissionRecord) -> usize {
    let text = TEXT_FIELDS
        .iter()
        .filter(|field| !record.text(**field).is_empty())
        .count();
    let extras = [
        !record.phone_no().is_empty(),
        record.importance != Importance::Medium,
        record.satisfaction() != SATISFACTION_DEFAULT,
        record.subscribe,
    ];
    text + extras.into_iter().filter(|filled| *filled).count()
}

/// Completion percentage, floored, in `0..=100`.
pub fn progress(record: &SubmissionRecord) -> u8 {
    (filled_fields(record) * 100 / TOTAL_FIELDS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills the `step`-th field, text inputs first.
    fn fill(record: &mut SubmissionRecord, step: usize) {
        match step {
            0..=12 => record.set_text(TEXT_FIELDS[step], "answer"),
            13 => {
                record.set_phone_no("9876543210");
            }
            14 => record.importance = Importance::High,
            15 => record.set_satisfaction(90),
            _ => record.subscribe = true,
        }
    }

    #[test]
    fn blank_form_is_zero() {
        assert_eq!(progress(&SubmissionRecord::default()), 0);
        assert_eq!(filled_fields(&SubmissionRecord::default()), 0);
    }

    #[test]
    fn filling_every_field_reaches_hundred_monotonically() {
        let mut record = SubmissionRecord::default();
        let mut last = progress(&record);
        for step in 0..TOTAL_FIELDS {
            fill(&mut record, step);
            let now = progress(&record);
            assert!(now >= last, "progress dropped from {} to {}", last, now);
            last = now;
        }
        assert_eq!(filled_fields(&record), TOTAL_FIELDS);
        assert_eq!(last, 100);
    }

    #[test]
    fn explicit_medium_importance_never_counts() {
        let mut record = SubmissionRecord::default();
        record.importance = Importance::Low;
        assert_eq!(filled_fields(&record), 1);
        record.importance = Importance::Medium;
        assert_eq!(filled_fields(&record), 0);
    }

    #[test]
    fn single_field_is_floored() {
        let mut record = SubmissionRecord::default();
        record.name = "Ada".to_string();
        // 100 / 17 = 5.88
        assert_eq!(progress(&record), 5);
    }
}
