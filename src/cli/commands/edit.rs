use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chain::SegmentPatch;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::currency::normalize_currency;

use super::session::with_chain;

/// Handle `edit`: partial update of a segment's non-date fields plus
/// hotel attach/detach toggles.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        booking,
        ordinal,
        meal,
        no_meal,
        currency,
        price,
        no_price,
        add_hotel,
        remove_hotel,
    } = cmd
    {
        let currency = match currency {
            Some(c) => Some(normalize_currency(c)?),
            None => None,
        };

        // Reject dangling hotel ids before opening the edit session
        {
            let pool = DbPool::new(&cfg.database)?;
            for hid in add_hotel.iter().chain(remove_hotel.iter()) {
                queries::resolve_hotel(&pool.conn, *hid)?;
            }
        }

        let patch = SegmentPatch {
            hotels: None,
            meal: if *no_meal {
                Some(None)
            } else {
                meal.clone().map(Some)
            },
            currency,
            target_price: if *no_price {
                Some(None)
            } else {
                price.map(Some)
            },
        };

        with_chain(cfg, *booking, |chain| {
            chain.update_fields(*ordinal, patch)?;
            for hid in add_hotel {
                chain.toggle_hotel(*ordinal, *hid, true)?;
            }
            for hid in remove_hotel {
                chain.toggle_hotel(*ordinal, *hid, false)?;
            }
            Ok(())
        })?;

        let pool = DbPool::new(&cfg.database)?;
        log::audit(
            &pool.conn,
            "edit",
            &format!("booking {booking}"),
            &format!("Segment {ordinal} fields updated"),
        )?;

        messages::success(format!(
            "Segment {ordinal} of booking [{booking}] updated."
        ));
    }

    Ok(())
}
