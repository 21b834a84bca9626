use askama::Template;

use super::PageContext;
use crate::models::talk::{Talk, TalkAuthor, TalkForm, TalkPage};
use crate::models::talk_type::TalkType;
use crate::models::talk_url::TalkUrl;

#[derive(Template)]
#[template(path = "talks/list.html")]
pub struct TalkListTemplate {
    pub ctx: PageContext,
    pub talk_page: TalkPage,
}

#[derive(Template)]
#[template(path = "talks/detail.html")]
pub struct TalkDetailTemplate {
    pub ctx: PageContext,
    pub talk: Talk,
    pub authors: Vec<TalkAuthor>,
    pub urls: Vec<TalkUrl>,
    pub can_edit: bool,
}

/// Raw field values echoed back into the submit/edit form.
#[derive(Debug, Default)]
pub struct TalkFormValues {
    pub title: String,
    pub abstract_text: String,
    pub talk_type_id: Option<i64>,
    pub authors: String,
}

impl TalkFormValues {
    pub fn from_form(form: &TalkForm, talk_type_id: Option<i64>) -> Self {
        TalkFormValues {
            title: form.title.clone(),
            abstract_text: form.abstract_text.clone(),
            talk_type_id,
            authors: form.authors.clone(),
        }
    }

    pub fn from_talk(talk: &Talk, authors: &[TalkAuthor]) -> Self {
        let co_authors: Vec<&str> = authors
            .iter()
            .filter(|a| a.id != talk.corresponding_author_id)
            .map(|a| a.username.as_str())
            .collect();
        TalkFormValues {
            title: talk.title.clone(),
            abstract_text: talk.abstract_text.clone(),
            talk_type_id: talk.talk_type_id,
            authors: co_authors.join(", "),
        }
    }
}

/// One `<option>` of the talk type selector.
pub struct TalkTypeOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

pub fn talk_type_options(types: &[TalkType], selected: Option<i64>) -> Vec<TalkTypeOption> {
    types
        .iter()
        .map(|t| TalkTypeOption {
            id: t.id,
            name: t.name.clone(),
            selected: selected == Some(t.id),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "talks/form.html")]
pub struct TalkFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub values: TalkFormValues,
    pub talk_types: Vec<TalkTypeOption>,
    pub can_submit: bool,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "talks/delete.html")]
pub struct TalkDeleteTemplate {
    pub ctx: PageContext,
    pub talk: Talk,
}
