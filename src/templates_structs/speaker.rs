use askama::Template;

use super::PageContext;
use crate::models::speaker::Speaker;

#[derive(Template)]
#[template(path = "speakers.html")]
pub struct SpeakersTemplate {
    pub ctx: PageContext,
    pub speaker_rows: Vec<Vec<Speaker>>,
}
