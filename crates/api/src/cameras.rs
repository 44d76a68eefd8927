//! Device list, camera detail and RTSP descriptor check

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::AuthorizedSession;
use crate::checks::{row_id, AssertMode, Row};
use crate::endpoints::Operation;
use crate::error::{Error, Result};

/// Maximum number of cameras checked per run
pub const CAMERA_SAMPLE_LIMIT: usize = 32;

const ID_FIELD: usize = 1;
const TYPE_FIELD: usize = 3;

/// RTSP URLs returned for a camera
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtspDescriptor {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preview_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub video_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RtspDescriptor {
    /// Name of the first empty URL field, if any
    pub fn empty_field(&self) -> Option<&'static str> {
        if self.preview_url.is_empty() {
            Some("preview_url")
        } else if self.video_url.is_empty() {
            Some("video_url")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRtsp {
    pub id: String,
    #[serde(flatten)]
    pub rtsp: RtspDescriptor,
}

/// Outcome of a passing camera check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraReport {
    /// Rows in the device list
    pub listed: usize,
    /// Cameras checked, in list order
    pub checked: Vec<CameraRtsp>,
}

/// Collect up to `CAMERA_SAMPLE_LIMIT` camera IDs in list order
pub fn select_camera_ids(rows: &[Row]) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for row in rows {
        if ids.len() == CAMERA_SAMPLE_LIMIT {
            break;
        }
        let is_camera = match row.get(TYPE_FIELD) {
            Some(Value::String(kind)) => kind == "camera",
            Some(_) => false,
            None => {
                return Err(Error::malformed(
                    Operation::DeviceList,
                    format!("row has {} fields, expected a type field", row.len()),
                ))
            }
        };
        if is_camera {
            ids.push(row_id(row, ID_FIELD, Operation::DeviceList)?);
        }
    }
    Ok(ids)
}

/// Fetch the device list, then device detail and RTSP URLs per camera
pub async fn check_cameras(auth: &AuthorizedSession, mode: AssertMode) -> Result<CameraReport> {
    let list = auth.get(Operation::DeviceList, &[]).await?;
    if !list.is_success() {
        return Err(Error::GetDeviceList {
            status: list.status,
        });
    }

    let rows: Vec<Row> = list.json()?;
    let ids = select_camera_ids(&rows)?;
    info!("Checking {} cameras out of {} devices", ids.len(), rows.len());

    let mut checked = Vec::with_capacity(ids.len());
    let mut last = None;
    for id in ids {
        let query = [("id", id.as_str())];
        let device = auth.get(Operation::Device, &query).await?;
        let rtsp = auth.get(Operation::DeviceRtsp, &query).await?;

        if !device.is_success() {
            return Err(Error::GetCamera {
                id,
                status: device.status,
            });
        }
        if !rtsp.is_success() {
            return Err(Error::GetCameraRtsp {
                id,
                status: rtsp.status,
            });
        }
        let descriptor: RtspDescriptor = rtsp.json()?;
        if let Some(field) = descriptor.empty_field() {
            return Err(Error::CameraRtspEmptyResponse { id, field });
        }
        debug!("Camera {} preview {}", id, descriptor.preview_url);

        last = Some(rtsp.status);
        checked.push(CameraRtsp {
            id,
            rtsp: descriptor,
        });
    }
    mode.finish("cameras", last)?;

    Ok(CameraReport {
        listed: rows.len(),
        checked,
    })
}
