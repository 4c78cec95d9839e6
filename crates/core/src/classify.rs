use std::collections::HashMap;
use std::sync::OnceLock;

/// Result of classifying a file extension: the top-level category folder and
/// the extension-named subfolder beneath it (".fbx" -> "Models"/"FBX").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: &'static str,
    pub subfolder: String,
}

// File extension -> main type folder.
static FOLDER_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn folder_map() -> &'static HashMap<&'static str, &'static str> {
    FOLDER_MAP.get_or_init(|| {
        HashMap::from([
            (".cs", "Scripts"),
            (".shader", "Shaders"),
            (".mat", "Materials"),
            (".mtl", "Materials"),
            (".png", "Textures"),
            (".jpg", "Textures"),
            (".jpeg", "Textures"),
            (".tga", "Textures"),
            (".svg", "Vectors"),
            (".xml", "SpriteSheets"),
            (".fbx", "Models"),
            (".obj", "Models"),
            (".glb", "Models"),
            (".prefab", "Prefabs"),
            (".anim", "Animations"),
            (".controller", "Animations"),
            (".wav", "Audio"),
            (".mp3", "Audio"),
            (".ogg", "Audio"),
        ])
    })
}

/// Maps a file extension to its target folders. Case-insensitive; accepts the
/// extension with or without its leading dot. Returns `None` for unsupported
/// types.
pub fn classify(extension: &str) -> Option<Classification> {
    let lower = extension.to_lowercase();
    let key = if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    };
    let category = folder_map().get(key.as_str())?;
    Some(Classification {
        category,
        subfolder: key.trim_start_matches('.').to_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions_to_category_and_subfolder() {
        let c = classify(".fbx").unwrap();
        assert_eq!(c.category, "Models");
        assert_eq!(c.subfolder, "FBX");

        let c = classify("png").unwrap();
        assert_eq!(c.category, "Textures");
        assert_eq!(c.subfolder, "PNG");
    }

    #[test]
    fn normalises_case() {
        let c = classify(".PNG").unwrap();
        assert_eq!(c.category, "Textures");
        assert_eq!(c.subfolder, "PNG");
    }

    #[test]
    fn repeated_categories_keep_distinct_subfolders() {
        assert_eq!(classify(".wav").unwrap().category, "Audio");
        assert_eq!(classify(".mp3").unwrap().category, "Audio");
        assert_eq!(classify(".wav").unwrap().subfolder, "WAV");
        assert_eq!(classify(".mp3").unwrap().subfolder, "MP3");
    }

    #[test]
    fn unsupported_extensions_return_none() {
        assert!(classify(".xyz").is_none());
        assert!(classify("").is_none());
        assert!(classify(".").is_none());
    }
}
