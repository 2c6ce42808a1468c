use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::tournament::{
    SpeciesCount, StateCount, TournamentFilter, TournamentRequest, TournamentStats,
};
use crate::error::{Result, StorageError};
use crate::models::Tournament;

const TOURNAMENT_COLUMNS: &str = r#"
    tournament_id, name, event_date, event_time, end_date, state, location, species,
    entry_fee, rules_summary, contact_name, contact_phone, contact_email, contact_website,
    organizer, description, max_participants, prize_info, source, created_at, updated_at
"#;

#[derive(FromRow)]
struct StateCountRow {
    state: String,
    count: i64,
}

#[derive(FromRow)]
struct SpeciesCountRow {
    species: String,
    count: i64,
}

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Filtered page of tournaments ordered by event date, plus the total match count
    pub async fn list(&self, filter: &TournamentFilter) -> Result<(Vec<Tournament>, i64)> {
        let pagination = filter.pagination();

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM tournaments");
        push_filters(&mut count_query, filter);
        let total_items = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(TOURNAMENT_COLUMNS);
        query.push(" FROM tournaments");
        push_filters(&mut query, filter);
        query.push(" ORDER BY event_date ASC, name LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let tournaments = query.build_query_as::<Tournament>().fetch_all(self.pool).await?;

        Ok((tournaments, total_items))
    }

    pub async fn find_by_id(&self, tournament_id: Uuid) -> Result<Tournament> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(TOURNAMENT_COLUMNS);
        query.push(" FROM tournaments WHERE tournament_id = ");
        query.push_bind(tournament_id);

        let tournament = query
            .build_query_as::<Tournament>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    pub async fn create(&self, req: &TournamentRequest) -> Result<Tournament> {
        let mut query = QueryBuilder::<Postgres>::new(
            r#"
            INSERT INTO tournaments (
                name, event_date, event_time, end_date, state, location, species,
                entry_fee, rules_summary, contact_name, contact_phone, contact_email,
                contact_website, organizer, description, max_participants, prize_info, source
            )
            "#,
        );
        query.push_values(std::iter::once(req), |mut row, req| {
            row.push_bind(&req.name)
                .push_bind(req.event_date)
                .push_bind(&req.event_time)
                .push_bind(req.end_date)
                .push_bind(&req.state)
                .push_bind(&req.location)
                .push_bind(&req.species)
                .push_bind(&req.entry_fee)
                .push_bind(&req.rules_summary)
                .push_bind(&req.contact_name)
                .push_bind(&req.contact_phone)
                .push_bind(&req.contact_email)
                .push_bind(&req.contact_website)
                .push_bind(&req.organizer)
                .push_bind(&req.description)
                .push_bind(req.max_participants)
                .push_bind(&req.prize_info)
                .push_bind(&req.source);
        });
        query.push(" RETURNING ");
        query.push(TOURNAMENT_COLUMNS);

        let tournament = query.build_query_as::<Tournament>().fetch_one(self.pool).await?;

        Ok(tournament)
    }

    /// Replace every editable field of a tournament
    pub async fn update(&self, tournament_id: Uuid, req: &TournamentRequest) -> Result<Tournament> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE tournaments SET ");
        let mut fields = query.separated(", ");
        fields.push("name = ").push_bind_unseparated(&req.name);
        fields.push("event_date = ").push_bind_unseparated(req.event_date);
        fields.push("event_time = ").push_bind_unseparated(&req.event_time);
        fields.push("end_date = ").push_bind_unseparated(req.end_date);
        fields.push("state = ").push_bind_unseparated(&req.state);
        fields.push("location = ").push_bind_unseparated(&req.location);
        fields.push("species = ").push_bind_unseparated(&req.species);
        fields.push("entry_fee = ").push_bind_unseparated(&req.entry_fee);
        fields.push("rules_summary = ").push_bind_unseparated(&req.rules_summary);
        fields.push("contact_name = ").push_bind_unseparated(&req.contact_name);
        fields.push("contact_phone = ").push_bind_unseparated(&req.contact_phone);
        fields.push("contact_email = ").push_bind_unseparated(&req.contact_email);
        fields.push("contact_website = ").push_bind_unseparated(&req.contact_website);
        fields.push("organizer = ").push_bind_unseparated(&req.organizer);
        fields.push("description = ").push_bind_unseparated(&req.description);
        fields.push("max_participants = ").push_bind_unseparated(req.max_participants);
        fields.push("prize_info = ").push_bind_unseparated(&req.prize_info);
        fields.push("source = ").push_bind_unseparated(&req.source);
        fields.push("updated_at = now()");
        query.push(" WHERE tournament_id = ");
        query.push_bind(tournament_id);
        query.push(" RETURNING ");
        query.push(TOURNAMENT_COLUMNS);

        let tournament = query
            .build_query_as::<Tournament>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Delete a tournament; series events that referenced it keep existing unlinked
    pub async fn delete(&self, tournament_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(tournament_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn stats(&self) -> Result<TournamentStats> {
        let total_tournaments = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tournaments")
            .fetch_one(self.pool)
            .await?;

        let upcoming = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tournaments WHERE event_date >= CURRENT_DATE",
        )
        .fetch_one(self.pool)
        .await?;

        let by_state = sqlx::query_as::<_, StateCountRow>(
            r#"
            SELECT state, COUNT(*) AS count
            FROM tournaments
            GROUP BY state
            ORDER BY count DESC, state
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let by_species = sqlx::query_as::<_, SpeciesCountRow>(
            r#"
            SELECT species, COUNT(*) AS count
            FROM tournaments
            WHERE species IS NOT NULL
            GROUP BY species
            ORDER BY count DESC, species
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(TournamentStats {
            total_tournaments,
            upcoming,
            by_state: by_state
                .into_iter()
                .map(|row| StateCount {
                    state: row.state,
                    count: row.count,
                })
                .collect(),
            by_species: by_species
                .into_iter()
                .map(|row| SpeciesCount {
                    species: row.species,
                    count: row.count,
                })
                .collect(),
        })
    }
}

fn push_filters<'q>(query: &mut QueryBuilder<'q, Postgres>, filter: &'q TournamentFilter) {
    query.push(" WHERE 1=1");

    if let Some(ref state) = filter.state {
        query.push(" AND state = ");
        query.push_bind(state);
    }

    if let Some(ref species) = filter.species {
        query.push(" AND species ILIKE ");
        query.push_bind(format!("%{species}%"));
    }

    if let Some(ref search) = filter.search {
        let pattern = format!("%{search}%");
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR organizer ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR location ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    if let Some(date_from) = filter.date_from {
        query.push(" AND event_date >= ");
        query.push_bind(date_from);
    }

    if let Some(date_to) = filter.date_to {
        query.push(" AND event_date <= ");
        query.push_bind(date_to);
    }
}
