use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::helpers::{parse_talk_type, resolve_authors};
use crate::auth::session::{current_actor, get_user_id};
use crate::auth::{csrf, policy, validate};
use crate::errors::{AppError, render};
use crate::models::talk::{self, TalkForm};
use crate::models::talk_type;
use crate::templates_structs::{
    PageContext, TalkFormTemplate, TalkFormValues, talk_type_options,
};

pub async fn edit_form(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let actor = current_actor(&session);

    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_edit(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()));
    }

    let authors = talk::find_authors(&pool, id).await?;
    let types = talk_type::find_all(&pool).await?;
    let values = TalkFormValues::from_talk(&talk, &authors);
    let selected = values.talk_type_id;

    let ctx = PageContext::build(&session, &pool).await?;
    render(TalkFormTemplate {
        ctx,
        form_action: format!("/talks/{id}"),
        form_title: "Edit Talk".to_string(),
        values,
        talk_types: talk_type_options(&types, selected),
        can_submit: true,
        errors: vec![],
    })
}

pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<TalkForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id =
        get_user_id(&session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))?;
    let actor = current_actor(&session);

    let id = path.into_inner();
    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_edit(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()));
    }

    let types = talk_type::find_all(&pool).await?;
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_title(&form.title));
    errors.extend(validate::validate_abstract(&form.abstract_text));
    let talk_type_id = parse_talk_type(&form.talk_type_id, &types, &mut errors);
    let co_authors = resolve_authors(&pool, &form.authors, &mut errors).await?;

    if !errors.is_empty() {
        let ctx = PageContext::build(&session, &pool).await?;
        let tmpl = TalkFormTemplate {
            ctx,
            form_action: format!("/talks/{id}"),
            form_title: "Edit Talk".to_string(),
            values: TalkFormValues::from_form(&form, talk_type_id),
            talk_types: talk_type_options(&types, talk_type_id),
            can_submit: true,
            errors,
        };
        return render(tmpl);
    }

    // The owner stays the corresponding author even when a privileged
    // manager performs the edit.
    let owner = talk.corresponding_author_id;
    let mut author_ids = vec![owner];
    author_ids.extend(co_authors.into_iter().filter(|aid| *aid != owner));

    let mut tx = pool.begin().await?;
    talk::update(
        &mut tx,
        id,
        form.title.trim(),
        form.abstract_text.trim(),
        talk_type_id,
        None,
    )
    .await?;
    talk::set_authors(&mut tx, id, &author_ids).await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk.modified",
        "talk",
        id,
        serde_json::json!({
            "title": form.title.trim(),
            "summary": "Talk Modified"
        }),
    )
    .await?;
    tx.commit().await?;

    let _ = session.insert("flash", "Talk updated");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/talks/{id}")))
        .finish())
}
