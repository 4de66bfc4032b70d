/// Inline keyboard (navigation buttons) attached to a message.
///
/// Rows are explicit because the paging screen puts Previous and Next side
/// by side on a single row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}
