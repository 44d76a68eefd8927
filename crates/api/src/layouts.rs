//! Layout list and layout detail check

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::AuthorizedSession;
use crate::checks::{row_id, AssertMode, Row};
use crate::endpoints::Operation;
use crate::error::{Error, Result};

/// Number of layouts fetched individually
pub const LAYOUT_SAMPLE_LIMIT: usize = 5;

/// Outcome of a passing layout check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Rows in the layout list
    pub listed: usize,
    /// Layout IDs fetched, in list order
    pub checked: Vec<String>,
}

/// Take the first `LAYOUT_SAMPLE_LIMIT` layout IDs in list order
pub fn select_layout_ids(rows: &[Row]) -> Result<Vec<String>> {
    rows.iter()
        .take(LAYOUT_SAMPLE_LIMIT)
        .map(|row| row_id(row, 0, Operation::LayoutList))
        .collect()
}

/// Fetch the layout list, then each sampled layout by ID
pub async fn check_layouts(auth: &AuthorizedSession, mode: AssertMode) -> Result<LayoutReport> {
    let list = auth.get(Operation::LayoutList, &[]).await?;
    if !list.is_success() {
        return Err(Error::GetLayoutsList {
            status: list.status,
        });
    }
    debug!("Layout list response: {}", list.body);

    let rows: Vec<Row> = list.json()?;
    let ids = select_layout_ids(&rows)?;
    info!("Checking {} of {} layouts", ids.len(), rows.len());

    let mut last = Some(list.status);
    for id in &ids {
        let resp = auth.get(Operation::Layout, &[("id", id.as_str())]).await?;
        if !resp.is_success() {
            return Err(Error::GetLayouts {
                id: id.clone(),
                status: resp.status,
            });
        }
        last = Some(resp.status);
    }
    mode.finish("layouts", last)?;

    Ok(LayoutReport {
        listed: rows.len(),
        checked: ids,
    })
}
