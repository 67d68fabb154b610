use std::path::Path;

use bytes::Bytes;
use imagesize::{ImageSize, ImageType};
use mime::Mime;
use uuid::Uuid;

use crate::{app::models::app_error::AppError, media::errors::MediaError};

/// A single file handed over by an image picker.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub id: String,
    pub file_name: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

impl ImageFile {
    pub fn new(file_name: &str, mime_type: Mime, data: impl Into<Bytes>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.to_string(),
            mime_type,
            data: data.into(),
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, AppError> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(%e);
                return Err(MediaError::UnreadableFile.value());
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or("file-name".to_string());
        let mime_type = sniff_mime_type(&data);

        Ok(Self::new(&file_name, mime_type, data))
    }

    pub fn dimensions(&self) -> Option<ImageSize> {
        imagesize::blob_size(&self.data).ok()
    }

    /// Encodes the file inline as `data:{mime};base64,{payload}`.
    pub fn to_data_uri(&self) -> Result<String, AppError> {
        if self.data.is_empty() {
            return Err(MediaError::EmptyFile.value());
        }

        if let Some(size) = self.dimensions() {
            tracing::debug!(
                "encoding {} ({}x{}, {} bytes)",
                self.file_name,
                size.width,
                size.height,
                self.data.len()
            );
        }

        Ok(format!(
            "data:{};base64,{}",
            self.mime_type.essence_str(),
            base64::encode(&self.data)
        ))
    }
}

fn sniff_mime_type(data: &[u8]) -> Mime {
    match imagesize::image_type(data) {
        Ok(ImageType::Png) => mime::IMAGE_PNG,
        Ok(ImageType::Jpeg) => mime::IMAGE_JPEG,
        Ok(ImageType::Gif) => mime::IMAGE_GIF,
        Ok(ImageType::Bmp) => mime::IMAGE_BMP,
        Ok(ImageType::Webp) => "image/webp"
            .parse::<Mime>()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::PIXEL_PNG, *};

    #[test]
    fn encodes_data_uri_with_declared_mime() {
        let file = ImageFile::new("a.txt", mime::IMAGE_JPEG, Bytes::from_static(b"abc"));
        assert_eq!(file.to_data_uri().unwrap(), "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn rejects_empty_file() {
        let file = ImageFile::new("empty.png", mime::IMAGE_PNG, Bytes::new());
        assert_eq!(file.to_data_uri().unwrap_err(), MediaError::EmptyFile.value());
    }

    #[test]
    fn reads_png_dimensions() {
        let file = ImageFile::new("pixel.png", mime::IMAGE_PNG, PIXEL_PNG.to_vec());
        let size = file.dimensions().unwrap();
        assert_eq!((size.width, size.height), (1, 1));
        assert_eq!(sniff_mime_type(&PIXEL_PNG), mime::IMAGE_PNG);
    }

    #[tokio::test]
    async fn loads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("{}.png", Uuid::new_v4()));
        tokio::fs::write(&path, PIXEL_PNG).await.unwrap();

        let file = ImageFile::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(file.mime_type, mime::IMAGE_PNG);
        assert!(file.to_data_uri().unwrap().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("does-not-exist-blog-studio.png");
        let err = ImageFile::from_path(&path).await.unwrap_err();
        assert_eq!(err, MediaError::UnreadableFile.value());
    }
}
