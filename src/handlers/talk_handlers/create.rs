use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::helpers::{parse_talk_type, resolve_authors};
use crate::auth::session::get_user_id;
use crate::auth::{csrf, validate};
use crate::errors::{AppError, render};
use crate::models::talk::{self, NewTalk, TalkForm, TalkStatus};
use crate::models::{setting, talk_type};
use crate::templates_structs::{
    PageContext, TalkFormTemplate, TalkFormValues, talk_type_options,
};

pub async fn new_form(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let types = talk_type::find_all(&pool).await?;
    let can_submit = talk_type::submission_open(setting::talks_open(&pool).await, &types);

    let ctx = PageContext::build(&session, &pool).await?;
    render(TalkFormTemplate {
        ctx,
        form_action: "/talks".to_string(),
        form_title: "Submit a Talk".to_string(),
        values: TalkFormValues::default(),
        talk_types: talk_type_options(&types, None),
        can_submit,
        errors: vec![],
    })
}

pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<TalkForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id =
        get_user_id(&session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))?;

    let types = talk_type::find_all(&pool).await?;
    let can_submit = talk_type::submission_open(setting::talks_open(&pool).await, &types);

    let mut errors: Vec<String> = vec![];
    if !can_submit {
        errors.push("Talk submission is closed".to_string());
    }
    errors.extend(validate::validate_title(&form.title));
    errors.extend(validate::validate_abstract(&form.abstract_text));
    let talk_type_id = parse_talk_type(&form.talk_type_id, &types, &mut errors);
    let co_authors = resolve_authors(&pool, &form.authors, &mut errors).await?;

    if !errors.is_empty() {
        let ctx = PageContext::build(&session, &pool).await?;
        let tmpl = TalkFormTemplate {
            ctx,
            form_action: "/talks".to_string(),
            form_title: "Submit a Talk".to_string(),
            values: TalkFormValues::from_form(&form, talk_type_id),
            talk_types: talk_type_options(&types, talk_type_id),
            can_submit,
            errors,
        };
        return render(tmpl);
    }

    let new = NewTalk {
        title: form.title.trim().to_string(),
        abstract_text: form.abstract_text.trim().to_string(),
        status: TalkStatus::UnderConsideration,
        corresponding_author_id: user_id,
        talk_type_id,
    };

    // Talk row, author links and the audit entry commit together.
    let mut tx = pool.begin().await?;
    let talk_id = talk::create(&mut tx, &new).await?;
    let mut author_ids = vec![user_id];
    author_ids.extend(co_authors.into_iter().filter(|id| *id != user_id));
    talk::set_authors(&mut tx, talk_id, &author_ids).await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk.created",
        "talk",
        talk_id,
        serde_json::json!({
            "title": new.title,
            "summary": "Talk Created"
        }),
    )
    .await?;
    tx.commit().await?;

    let _ = session.insert("flash", "Talk submitted");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/talks/{talk_id}")))
        .finish())
}
