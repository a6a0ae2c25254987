use serde::Serialize;
use std::fmt;

pub const PHONE_NO_MAX_DIGITS: usize = 10;
pub const SATISFACTION_MIN: u8 = 10;
pub const SATISFACTION_MAX: u8 = 100;
pub const SATISFACTION_STEP: u8 = 10;
pub const SATISFACTION_DEFAULT: u8 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
}

impl Importance {
    pub const ALL: [Importance; 3] = [Importance::Low, Importance::Medium, Importance::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Importance::ALL.into_iter().find(|i| i.as_str() == value)
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text inputs of the survey, in the order the form renders them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    DialCode,
    Feedback,
    CommunityFeatures,
    Communities,
    InteractionFeatures,
    PrivacyFeatures,
    UxFeatures,
    ContentConsumption,
    OrganizingFeatures,
    Motivations,
    AdditionalComments,
}

impl TextField {
    pub const QUESTIONS: [TextField; 9] = [
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

    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Full Name",
            TextField::Email => "Email Address",
            TextField::DialCode => "Country Code",
            TextField::Feedback => "Your Feedback",
            TextField::CommunityFeatures => "What features do you think are most important for an online community platform?",
            TextField::Communities => "What kind of communities or groups would you like to be part of?",
            TextField::InteractionFeatures => "How would you like to interact with other members (chat, voice, video, forums)?",
            TextField::PrivacyFeatures => "Which privacy or safety features matter most to you?",
            TextField::UxFeatures => "What would make the platform easy and enjoyable to use?",
            TextField::ContentConsumption => "How do you prefer to consume content (articles, videos, live sessions, code)?",
            TextField::OrganizingFeatures => "Would you like to see features that help in organizing or managing communities or groups?",
            TextField::Motivations => "What motivates you to stay active and engaged in a community?",
            TextField::AdditionalComments => "Is there anything else you would like to see or expect from this platform?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TextField::Name => "Enter your name",
            TextField::Email => "Enter your email",
            TextField::Feedback => "Tell us what you think",
            TextField::CommunityFeatures => "E.g. instant messaging, voice/video chat, community discussion, content sharing, etc.",
            TextField::Communities => "E.g., Artificial Intelligence, Software Engineering, Cyber Security, Blockchain Development, etc.",
            _ => "",
        }
    }
}

/// A single user edit, as emitted by the form inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Text(TextField, String),
    PhoneNo(String),
    Importance(Importance),
    Satisfaction(i32),
    Subscribe(bool),
}

/// One in-progress survey answer set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    /// International dialling prefix such as `+91`, picked from a list.
    pub phone: String,
    phone_no: String,
    pub importance: Importance,
    pub feedback: String,
    pub community_features: String,
    pub communities: String,
    pub interaction_features: String,
    pub privacy_features: String,
    pub ux_features: String,
    pub content_consumption: String,
    pub organizing_features: String,
    pub motivations: String,
    pub additional_comments: String,
    satisfaction: u8,
    pub subscribe: bool,
}

impl Default for SubmissionRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            phone_no: String::new(),
            importance: Importance::default(),
            feedback: String::new(),
            community_features: String::new(),
            communities: String::new(),
            interaction_features: String::new(),
            privacy_features: String::new(),
            ux_features: String::new(),
            content_consumption: String::new(),
            organizing_features: String::new(),
            motivations: String::new(),
            additional_comments: String::new(),
            satisfaction: SATISFACTION_DEFAULT,
            subscribe: false,
        }
    }
}

impl SubmissionRecord {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::DialCode => &self.phone,
            TextField::Feedback => &self.feedback,
            TextField::CommunityFeatures => &self.community_features,
            TextField::Communities => &self.communities,
            TextField::InteractionFeatures => &self.interaction_features,
            TextField::PrivacyFeatures => &self.privacy_features,
            TextField::UxFeatures => &self.ux_features,
            TextField::ContentConsumption => &self.content_consumption,
            TextField::OrganizingFeatures => &self.organizing_features,
            TextField::Motivations => &self.motivations,
            TextField::AdditionalComments => &self.additional_comments,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::DialCode => &mut self.phone,
            TextField::Feedback => &mut self.feedback,
            TextField::CommunityFeatures => &mut self.community_features,
            TextField::Communities => &mut self.communities,
            TextField::InteractionFeatures => &mut self.interaction_features,
            TextField::PrivacyFeatures => &mut self.privacy_features,
            TextField::UxFeatures => &mut self.ux_features,
            TextField::ContentConsumption => &mut self.content_consumption,
            TextField::OrganizingFeatures => &mut self.organizing_features,
            TextField::Motivations => &mut self.motivations,
            TextField::AdditionalComments => &mut self.additional_comments,
        };
        *slot = value.into();
    }

    pub fn phone_no(&self) -> &str {
        &self.phone_no
    }

    pub fn is_valid_phone_no(input: &str) -> bool {
        input.len() <= PHONE_NO_MAX_DIGITS && input.bytes().all(|b| b.is_ascii_digit())
    }

    /// Accepts the edit only if the whole value stays ASCII digits, at most
    /// ten of them. Returns whether the value changed.
    pub fn set_phone_no(&mut self, input: &str) -> bool {
        if !Self::is_valid_phone_no(input) {
            return false;
        }
        self.phone_no = input.to_string();
        true
    }

    pub fn satisfaction(&self) -> u8 {
        self.satisfaction
    }

    /// Clamps to 10..=100 and snaps to the nearest multiple of 10.
    pub fn set_satisfaction(&mut self, value: i32) {
        let clamped = value.clamp(SATISFACTION_MIN as i32, SATISFACTION_MAX as i32);
        let step = SATISFACTION_STEP as i32;
        let snapped = ((clamped + step / 2) / step) * step;
        self.satisfaction = snapped.min(SATISFACTION_MAX as i32) as u8;
    }

    /// Applies one edit. Returns false when the edit was refused.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        match edit {
            FieldEdit::Text(field, value) => self.set_text(field, value),
            FieldEdit::PhoneNo(value) => return self.set_phone_no(&value),
            FieldEdit::Importance(importance) => self.importance = importance,
            FieldEdit::Satisfaction(value) => self.set_satisfaction(value),
            FieldEdit::Subscribe(subscribe) => self.subscribe = subscribe,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required inputs that are still blank, in form order.
    pub fn missing_required(&self) -> Option<&'static str> {
        [
            (TextField::Name, "name"),
            (TextField::Email, "email"),
            (TextField::Feedback, "feedback"),
        ]
        .into_iter()
        .find(|(field, _)| self.text(*field).trim().is_empty())
        .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_blank_form() {
        let record = SubmissionRecord::default();
        assert_eq!(record.importance, Importance::Medium);
        assert_eq!(record.satisfaction(), 50);
        assert!(!record.subscribe);
        assert_eq!(record.phone_no(), "");
        assert!(record.name.is_empty() && record.feedback.is_empty());
    }

    #[test]
    fn phone_no_only_takes_up_to_ten_digits() {
        let mut record = SubmissionRecord::default();
        let typed = "98765x43210123";
        let mut current = String::new();
        for c in typed.chars() {
            let mut next = current.clone();
            next.push(c);
            if record.set_phone_no(&next) {
                current = next;
            }
            assert!(record.phone_no().len() <= 10);
            assert!(record.phone_no().bytes().all(|b| b.is_ascii_digit()));
        }
        assert_eq!(record.phone_no(), "9876543210");
    }

    #[test]
    fn phone_no_rejects_pasted_garbage_and_keeps_old_value() {
        let mut record = SubmissionRecord::default();
        assert!(record.set_phone_no("12345"));
        assert!(!record.set_phone_no("12 345"));
        assert!(!record.set_phone_no("+91123"));
        assert!(!record.set_phone_no("١٢٣"));
        assert!(!record.set_phone_no("12345678901"));
        assert_eq!(record.phone_no(), "12345");
        assert!(record.set_phone_no(""));
        assert_eq!(record.phone_no(), "");
    }

    #[test]
    fn dial_code_lands_in_phone_beside_the_digits() {
        let mut record = SubmissionRecord::default();
        assert!(record.apply(FieldEdit::Text(TextField::DialCode, "+44".to_string())));
        assert!(record.set_phone_no("2071234567"));
        assert_eq!(record.text(TextField::DialCode), "+44");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phone"], "+44");
        assert_eq!(json["phoneNo"], "2071234567");
        assert_eq!(TextField::DialCode.label(), "Country Code");
    }

    #[test]
    fn satisfaction_snaps_to_grid() {
        let mut record = SubmissionRecord::default();
        record.set_satisfaction(0);
        assert_eq!(record.satisfaction(), 10);
        record.set_satisfaction(74);
        assert_eq!(record.satisfaction(), 70);
        record.set_satisfaction(75);
        assert_eq!(record.satisfaction(), 80);
        record.set_satisfaction(250);
        assert_eq!(record.satisfaction(), 100);
    }

    #[test]
    fn serializes_with_template_parameter_names() {
        let mut record = SubmissionRecord::default();
        record.set_text(TextField::CommunityFeatures, "voice chat");
        record.set_phone_no("0123");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["communityFeatures"], "voice chat");
        assert_eq!(value["phoneNo"], "0123");
        assert_eq!(value["importance"], "Medium");
        assert_eq!(value["satisfaction"], 50);
        assert_eq!(value["subscribe"], false);
        assert_eq!(value.as_object().unwrap().len(), 17);
    }

    #[test]
    fn missing_required_reports_first_blank() {
        let mut record = SubmissionRecord::default();
        assert_eq!(record.missing_required(), Some("name"));
        record.set_text(TextField::Name, "Ada");
        record.set_text(TextField::Email, "ada@example.com");
        assert_eq!(record.missing_required(), Some("feedback"));
        record.set_text(TextField::Feedback, "   ");
        assert_eq!(record.missing_required(), Some("feedback"));
        record.set_text(TextField::Feedback, "Looks good");
        assert_eq!(record.missing_required(), None);
    }

    #[test]
    fn apply_routes_edits_and_refuses_bad_digits() {
        let mut record = SubmissionRecord::default();
        assert!(record.apply(FieldEdit::Text(TextField::Communities, "Rustaceans".into())));
        assert!(record.apply(FieldEdit::Importance(Importance::Low)));
        assert!(record.apply(FieldEdit::Satisfaction(100)));
        assert!(record.apply(FieldEdit::Subscribe(true)));
        assert!(record.apply(FieldEdit::PhoneNo("555".into())));
        assert!(!record.apply(FieldEdit::PhoneNo("555-1234".into())));
        assert_eq!(record.communities, "Rustaceans");
        assert_eq!(record.importance, Importance::Low);
        assert_eq!(record.satisfaction(), 100);
        assert!(record.subscribe);
        assert_eq!(record.phone_no(), "555");

        record.reset();
        assert_eq!(record, SubmissionRecord::default());
    }

    #[test]
    fn importance_parses_radio_values() {
        assert_eq!(Importance::parse("High"), Some(Importance::High));
        assert_eq!(Importance::parse("high"), None);
    }
}
