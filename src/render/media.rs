/// Stateless media-reference classifier. Anything not recognizably video
/// (including an empty reference) renders as an image; broken references
/// degrade at the media layer, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm"];

pub fn classify(src: &str) -> MediaKind {
    if src.is_empty() {
        return MediaKind::Image;
    }
    if src.starts_with("data:video") {
        return MediaKind::Video;
    }
    let lower = src.to_lowercase();
    if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return MediaKind::Video;
    }
    MediaKind::Image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(classify("clip.MP4"), MediaKind::Video);
        assert_eq!(classify("reel.mov"), MediaKind::Video);
        assert_eq!(classify("loop.WebM"), MediaKind::Video);
    }

    #[test]
    fn test_data_reference_prefix() {
        assert_eq!(classify("data:video/webm;base64,AAA"), MediaKind::Video);
        assert_eq!(classify("data:image/png;base64,AAA"), MediaKind::Image);
    }

    #[test]
    fn test_image_is_the_default() {
        assert_eq!(classify("photo.jpg"), MediaKind::Image);
        assert_eq!(classify("https://cdn.example/banner.png"), MediaKind::Image);
        assert_eq!(classify(""), MediaKind::Image);
        assert_eq!(classify("movie"), MediaKind::Image);
    }
}
