//! Slack message cards for command responses.
//!
//! Every response, success or failure, is a single card with one
//! attachment. Slack renders `text` and `fields` as mrkdwn.

use serde::Serialize;

use crate::domain::{ArrivalRecord, StationName};

/// Headline shown above every card.
pub const HEADLINE: &str = "Next available trains";

/// Attachment sidebar colour.
pub const CARD_COLOR: &str = "#1E98D1";

/// Footer shown on every attachment.
pub const FOOTER: &str = "Seprr © 2020";

/// Attachment text on error cards.
pub const ERROR_TEXT: &str =
    "*There has been an error processing your request. Please try again.*";

/// Title of the single field on error cards.
pub const ERROR_FIELD_TITLE: &str = "Error Info #";

/// Attachment parts Slack should render as mrkdwn.
const MRKDWN_IN: [&str; 2] = ["text", "fields"];

/// A Slack message with attachments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseCard {
    /// Headline text
    pub text: String,

    /// Always exactly one attachment
    pub attachments: Vec<Attachment>,
}

/// A Slack message attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub color: String,

    pub mrkdwn_in: [&'static str; 2],

    pub fields: Vec<Field>,

    /// Unix timestamp in seconds
    pub ts: i64,

    pub footer: String,
}

impl Attachment {
    fn new(ts: i64) -> Self {
        Self {
            title: None,
            text: None,
            color: CARD_COLOR.to_string(),
            mrkdwn_in: MRKDWN_IN,
            fields: Vec::new(),
            ts,
            footer: FOOTER.to_string(),
        }
    }
}

/// A titled value inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
}

/// Build the card listing upcoming trains, stamped with the current time.
pub fn format_success(
    records: &[ArrivalRecord],
    from: StationName,
    to: StationName,
) -> ResponseCard {
    format_success_at(records, from, to, unix_now())
}

/// Build the card listing upcoming trains with an explicit timestamp.
///
/// The attachment text names the line of the *last* record; each record
/// still gets its own field. With no records the attachment has no text
/// and no fields.
pub fn format_success_at(
    records: &[ArrivalRecord],
    from: StationName,
    to: StationName,
    ts: i64,
) -> ResponseCard {
    let mut attachment = Attachment::new(ts);

    for record in records {
        attachment.text = Some(format!(
            "*On* {} Line *From* {} *To* {}",
            record.line, from, to
        ));

        attachment.fields.push(Field {
            title: format!("Train # {}", record.train_number),
            value: format!(
                "*Departure time : {}*  | `{}`",
                record.departure_time, record.delay
            ),
        });
    }

    ResponseCard {
        text: HEADLINE.to_string(),
        attachments: vec![attachment],
    }
}

/// Build an error card, stamped with the current time.
pub fn format_error(message: &str) -> ResponseCard {
    format_error_at(message, unix_now())
}

/// Build an error card with an explicit timestamp.
pub fn format_error_at(message: &str, ts: i64) -> ResponseCard {
    let mut attachment = Attachment::new(ts);
    attachment.text = Some(ERROR_TEXT.to_string());
    attachment.fields.push(Field {
        title: ERROR_FIELD_TITLE.to_string(),
        value: format!("*Details:* {message}"),
    });

    ResponseCard {
        text: HEADLINE.to_string(),
        attachments: vec![attachment],
    }
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
