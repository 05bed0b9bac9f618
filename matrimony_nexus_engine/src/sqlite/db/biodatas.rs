use log::debug;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    db_types::{Biodata, BiodataUpdate, NewBiodata},
    helpers::{cm_to_inches, height_string_to_inches},
    mne_api::biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    traits::{BiodataError, InsertRecordResult},
};

/// Fetches biodatas according to criteria specified in the `BiodataQueryFilter`.
///
/// `total` counts every match before the LIMIT/OFFSET pagination is applied. Results are ordered by `biodata_id` in
/// ascending order.
pub async fn search_biodatas(
    query: BiodataQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<BiodataSearchResult, BiodataError> {
    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM biodatas ");
    push_filters(&mut count, &query);
    let total: i64 = count.build_query_scalar().fetch_one(&mut *conn).await?;

    let mut builder = QueryBuilder::new("SELECT * FROM biodatas ");
    push_filters(&mut builder, &query);
    builder.push(" ORDER BY biodata_id LIMIT ");
    builder.push_bind(query.limit());
    builder.push(" OFFSET ");
    builder.push_bind(query.offset());
    let data = builder.build_query_as::<Biodata>().fetch_all(conn).await?;
    Ok(BiodataSearchResult { data, total })
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &BiodataQueryFilter) {
    if query.is_empty() {
        return;
    }
    builder.push("WHERE ");
    let mut where_clause = builder.separated(" AND ");
    if let Some(gender) = &query.gender {
        where_clause.push("biodata_type = ");
        where_clause.push_bind_unseparated(gender.clone());
    }
    if let Some((min_age, max_age)) = query.age_range() {
        where_clause.push("age BETWEEN ");
        where_clause.push_bind_unseparated(min_age);
        where_clause.push_unseparated(" AND ");
        where_clause.push_bind_unseparated(max_age);
    }
    if let Some((min_cm, max_cm)) = query.height_range() {
        // The cm bounds go through the same feet/inches conversion as stored heights, so both sides of the
        // comparison live on the same scale. Unparseable stored heights have a NULL height_inches and never match.
        if let (Some(min_inches), Some(max_inches)) = (cm_to_inches(min_cm as f64), cm_to_inches(max_cm as f64)) {
            where_clause.push("height_inches BETWEEN ");
            where_clause.push_bind_unseparated(min_inches);
            where_clause.push_unseparated(" AND ");
            where_clause.push_bind_unseparated(max_inches);
        }
    }
    if let Some(email) = &query.email {
        where_clause.push("contact_email = ");
        where_clause.push_bind_unseparated(email.clone());
    }
    if let Some(division) = &query.permanent_division {
        where_clause.push("permanent_division = ");
        where_clause.push_bind_unseparated(division.clone());
    }
    if let Some(biodata_id) = query.biodata_id {
        where_clause.push("biodata_id = ");
        where_clause.push_bind_unseparated(biodata_id);
    }
}

pub async fn fetch_biodata_by_id(
    biodata_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Biodata>, BiodataError> {
    let biodata =
        sqlx::query_as("SELECT * FROM biodatas WHERE biodata_id = $1").bind(biodata_id).fetch_optional(conn).await?;
    Ok(biodata)
}

/// Inserts a new biodata unless one already exists for the contact email.
///
/// The id assignment reads the current maximum and adds one inside the INSERT statement itself, so two concurrent
/// inserts cannot be handed the same id. The duplicate-email check stays check-then-insert.
pub async fn insert_biodata_if_absent(
    biodata: NewBiodata,
    conn: &mut SqliteConnection,
) -> Result<InsertRecordResult, BiodataError> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT biodata_id FROM biodatas WHERE contact_email = $1 LIMIT 1")
        .bind(&biodata.contact_email)
        .fetch_optional(&mut *conn)
        .await?;
    if existing.is_some() {
        debug!("🧑️ A biodata for {} already exists. Nothing to do", biodata.contact_email);
        return Ok(InsertRecordResult::AlreadyExists);
    }
    let height_inches = biodata.height.as_deref().and_then(height_string_to_inches);
    let biodata_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO biodatas (
            biodata_id,
            biodata_type,
            name,
            profile_image,
            date_of_birth,
            height,
            height_inches,
            weight,
            age,
            occupation,
            race,
            fathers_name,
            mothers_name,
            permanent_division,
            present_division,
            expected_partner_age,
            expected_partner_height,
            expected_partner_weight,
            contact_email,
            mobile_number,
            premium
        )
        SELECT COALESCE(MAX(biodata_id), 0) + 1,
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
        FROM biodatas
        RETURNING biodata_id
        "#,
    )
    .bind(biodata.biodata_type)
    .bind(biodata.name)
    .bind(biodata.profile_image)
    .bind(biodata.date_of_birth)
    .bind(biodata.height)
    .bind(height_inches)
    .bind(biodata.weight)
    .bind(biodata.age)
    .bind(biodata.occupation)
    .bind(biodata.race)
    .bind(biodata.fathers_name)
    .bind(biodata.mothers_name)
    .bind(biodata.permanent_division)
    .bind(biodata.present_division)
    .bind(biodata.expected_partner_age)
    .bind(biodata.expected_partner_height)
    .bind(biodata.expected_partner_weight)
    .bind(biodata.contact_email)
    .bind(biodata.mobile_number)
    .bind(biodata.premium)
    .fetch_one(conn)
    .await?;
    debug!("🧑️ Biodata inserted with id {biodata_id}");
    Ok(InsertRecordResult::Inserted(biodata_id))
}

/// Applies the fields present in the update. An update of the height also refreshes the derived inches column.
/// Returns `false` if no biodata with that id exists.
pub async fn update_biodata(
    biodata_id: i64,
    update: BiodataUpdate,
    conn: &mut SqliteConnection,
) -> Result<bool, BiodataError> {
    if update.is_empty() {
        let exists: Option<i64> = sqlx::query_scalar("SELECT biodata_id FROM biodatas WHERE biodata_id = $1")
            .bind(biodata_id)
            .fetch_optional(conn)
            .await?;
        return Ok(exists.is_some());
    }
    let height_inches = update.height.as_deref().map(height_string_to_inches);
    let mut builder = QueryBuilder::new("UPDATE biodatas SET ");
    let mut set_clause = builder.separated(", ");
    macro_rules! set_field {
        ($field:ident, $column:literal) => {
            if let Some(value) = update.$field {
                set_clause.push(concat!($column, " = "));
                set_clause.push_bind_unseparated(value);
            }
        };
    }
    set_field!(biodata_type, "biodata_type");
    set_field!(name, "name");
    set_field!(profile_image, "profile_image");
    set_field!(date_of_birth, "date_of_birth");
    set_field!(height, "height");
    if let Some(height_inches) = height_inches {
        set_clause.push("height_inches = ");
        set_clause.push_bind_unseparated(height_inches);
    }
    set_field!(weight, "weight");
    set_field!(age, "age");
    set_field!(occupation, "occupation");
    set_field!(race, "race");
    set_field!(fathers_name, "fathers_name");
    set_field!(mothers_name, "mothers_name");
    set_field!(permanent_division, "permanent_division");
    set_field!(present_division, "present_division");
    set_field!(expected_partner_age, "expected_partner_age");
    set_field!(expected_partner_height, "expected_partner_height");
    set_field!(expected_partner_weight, "expected_partner_weight");
    set_field!(contact_email, "contact_email");
    set_field!(mobile_number, "mobile_number");
    set_field!(premium, "premium");
    builder.push(" WHERE biodata_id = ");
    builder.push_bind(biodata_id);
    let result = builder.build().execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_biodata(biodata_id: i64, conn: &mut SqliteConnection) -> Result<bool, BiodataError> {
    let result = sqlx::query("DELETE FROM biodatas WHERE biodata_id = $1").bind(biodata_id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
