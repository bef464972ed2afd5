use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::errors::{PortalError, Result};
use crate::models::files::entities::StoredUpload;
use crate::storage::UploadStore;
use crate::utils::validate_magic_bytes;

// multipart 中文件字段名
const FILE_FIELD: &str = "file";

/// 接收单个上传文件
///
/// 扩展名、大小和内容校验全部在内存中完成，通过后才写入磁盘；
/// 返回的文件尚未被任何记录引用，后续步骤失败时由调用方丢弃。
pub async fn receive_single_file(
    store: &UploadStore,
    mut payload: Multipart,
) -> Result<StoredUpload> {
    let max_size = store.max_size();
    let mut received: Option<(String, String, String, Vec<u8>)> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PortalError::validation(format!("Malformed multipart body: {e}")))?
    {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        // 其它字段忽略，但需要读完
        if name != FILE_FIELD {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| PortalError::validation(format!("Malformed multipart body: {e}")))?;
            }
            continue;
        }

        if received.is_some() {
            return Err(PortalError::validation(
                "Only one file can be uploaded at a time",
            ));
        }

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        // 先校验扩展名，再读取内容
        let extension = store.check_extension(&original_name)?;

        // MIME 类型只做记录，不用于校验
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| PortalError::validation(format!("Failed to read upload: {e}")))?;
            if data.len() + chunk.len() > max_size {
                return Err(PortalError::payload_too_large(format!(
                    "File size exceeds the limit of {max_size} bytes"
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if !validate_magic_bytes(&data, &extension) {
            return Err(PortalError::validation(
                "File content is empty or does not match its extension",
            ));
        }

        received = Some((original_name, extension, content_type, data));
    }

    let Some((original_name, extension, content_type, data)) = received else {
        return Err(PortalError::validation("No file uploaded"));
    };

    let upload = store.save(&original_name, &extension, &content_type, &data)?;
    tracing::info!(
        stored_name = %upload.stored_name,
        size = upload.size,
        "Stored uploaded file '{}'",
        upload.original_name
    );
    Ok(upload)
}
