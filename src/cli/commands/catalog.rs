use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};

/// Handle the `city`, `hotel` and `guide` catalog subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match cmd {
        Commands::City { add, country, list } => {
            if let Some(name) = add {
                let country = country.as_deref().ok_or_else(|| {
                    AppError::Other("missing --country for the new city".to_string())
                })?;
                let id = queries::insert_city(conn, name, country)?;
                println!("✅ City added: [{id}] {name}, {country}");
            }

            if *list {
                let cities = queries::list_cities(conn)?;
                if cities.is_empty() {
                    println!("⚠️  No cities recorded yet.");
                } else {
                    println!("🏙️  Cities:\n");
                    for c in cities {
                        println!("  [{:>3}] {} ({})", c.id, c.name, c.country);
                    }
                }
            }
        }

        Commands::Hotel { add, city, list } => {
            if let Some(name) = add {
                let city_id = city.ok_or_else(|| {
                    AppError::Other("missing --city for the new hotel".to_string())
                })?;
                let id = queries::insert_hotel(conn, city_id, name)?;
                let city = queries::resolve_city(conn, city_id)?;
                println!("✅ Hotel added: [{id}] {name} in {}", city.name);
            }

            if *list {
                let hotels = queries::list_hotels(conn, *city)?;
                if hotels.is_empty() {
                    println!("⚠️  No hotels recorded yet.");
                } else {
                    println!("🏨 Hotels:\n");
                    for h in hotels {
                        let city = queries::resolve_city(conn, h.city_id)?;
                        println!("  [{:>3}] {} ({})", h.id, h.name, city.name);
                    }
                }
            }
        }

        Commands::Guide { add, list } => {
            if let Some(name) = add {
                let id = queries::insert_guide(conn, name)?;
                println!("✅ Guide added: [{id}] {name}");
            }

            if *list {
                let guides = queries::list_guides(conn)?;
                if guides.is_empty() {
                    println!("⚠️  No guides recorded yet.");
                } else {
                    println!("🧭 Guides:\n");
                    for g in guides {
                        println!("  [{:>3}] {}", g.id, g.name);
                    }
                }
            }
        }

        _ => {}
    }

    Ok(())
}
