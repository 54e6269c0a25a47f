// 🏛️ Directory - university officials and office locations

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

pub struct UniversityOfficialSeeder;

impl EntitySeeder for UniversityOfficialSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::UniversityOfficial
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());

        for official in ctx.dataset.officials {
            let key = format!("{} / {}", official.position_title, official.full_name);
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM university_officials WHERE position_title = ?1 AND full_name = ?2",
                params![official.position_title, official.full_name],
            )
            .for_entity(kind)?;

            match existing {
                Some(id) => {
                    ctx.update(kind, &key, || {
                        ctx.conn.execute(
                            "UPDATE university_officials
                             SET position = ?1, department = ?2, email = ?3, phone = ?4,
                                 office_location = ?5, bio = ?6, display_order = ?7, is_active = 1
                             WHERE id = ?8",
                            params![
                                official.position,
                                official.department,
                                official.email,
                                official.phone,
                                official.office_location,
                                official.bio,
                                official.display_order,
                                id,
                            ],
                        )
                    })?;
                    ctx.record(kind, &key, id)?;
                    tally.record_refreshed();
                }
                None => {
                    ctx.insert(kind, &key, || {
                        ctx.conn.execute(
                            "INSERT INTO university_officials (
                                position, position_title, full_name, department, email, phone,
                                office_location, bio, display_order
                            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                            params![
                                official.position,
                                official.position_title,
                                official.full_name,
                                official.department,
                                official.email,
                                official.phone,
                                official.office_location,
                                official.bio,
                                official.display_order,
                            ],
                        )
                    })?;
                    ctx.record(kind, &key, ctx.conn.last_insert_rowid())?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}

pub struct OfficeLocationSeeder;

impl EntitySeeder for OfficeLocationSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::OfficeLocation
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());

        for office in ctx.dataset.offices {
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM office_locations WHERE name = ?1",
                params![office.name],
            )
            .for_entity(kind)?;

            match existing {
                Some(id) => {
                    ctx.update(kind, office.name, || {
                        ctx.conn.execute(
                            "UPDATE office_locations
                             SET office_type = ?1, building = ?2, floor = ?3, room_number = ?4,
                                 description = ?5, services_offered = ?6, contact_person = ?7,
                                 email = ?8, phone = ?9, opening_hours = ?10, is_active = 1
                             WHERE id = ?11",
                            params![
                                office.office_type,
                                office.building,
                                office.floor,
                                office.room_number,
                                office.description,
                                office.services_offered,
                                office.contact_person,
                                office.email,
                                office.phone,
                                office.opening_hours,
                                id,
                            ],
                        )
                    })?;
                    ctx.record(kind, office.name, id)?;
                    tally.record_refreshed();
                }
                None => {
                    ctx.insert(kind, office.name, || {
                        ctx.conn.execute(
                            "INSERT INTO office_locations (
                                name, office_type, building, floor, room_number, description,
                                services_offered, contact_person, email, phone, opening_hours
                            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                            params![
                                office.name,
                                office.office_type,
                                office.building,
                                office.floor,
                                office.room_number,
                                office.description,
                                office.services_offered,
                                office.contact_person,
                                office.email,
                                office.phone,
                                office.opening_hours,
                            ],
                        )
                    })?;
                    ctx.record(kind, office.name, ctx.conn.last_insert_rowid())?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}
