use crate::models::{Project, RawReel, Reel, ReelSource};

/// Turns an uploaded filename into a display title: drops a trailing `.mp4`
/// (any case), swaps underscores for spaces and capitalises each word.
pub fn display_name(filename: &str) -> String {
    let stem = match filename.len().checked_sub(4) {
        Some(cut) if filename.is_char_boundary(cut) && filename[cut..].eq_ignore_ascii_case(".mp4") => {
            &filename[..cut]
        }
        _ => filename,
    };

    let mut out = String::with_capacity(stem.len());
    let mut at_word_start = true;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

pub fn derive_reels(raw: &[RawReel]) -> Vec<Reel> {
    raw.iter()
        .enumerate()
        .map(|(index, reel)| {
            let id = index as u32 + 1;
            let name = display_name(reel.filename);
            match reel.source {
                ReelSource::Youtube => Reel {
                    id,
                    name,
                    source: ReelSource::Youtube,
                    thumbnail: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", reel.id),
                    embed_url: format!(
                        "https://www.youtube.com/embed/{}?autoplay=1&mute=1&loop=1&playsinline=1&controls=1",
                        reel.id
                    ),
                    direct_url: None,
                },
                ReelSource::Gdrive => Reel {
                    id,
                    name,
                    source: ReelSource::Gdrive,
                    thumbnail: format!("https://drive.google.com/thumbnail?id={}&sz=w600", reel.id),
                    embed_url: format!("https://drive.google.com/file/d/{}/preview", reel.id),
                    direct_url: Some(format!(
                        "https://drive.google.com/uc?export=download&id={}",
                        reel.id
                    )),
                },
            }
        })
        .collect()
}

/// Lightbox image source. Drive thumbnails default to a small size, so ask for a 1920px render.
pub fn high_res_thumbnail(project: &Project) -> String {
    if project.thumbnail.contains("drive.google.com") {
        format!("{}&sz=w1920", project.thumbnail)
    } else {
        project.thumbnail.to_string()
    }
}

pub fn client_logo_url(logo_id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{}", logo_id)
}

/// Doubles a list so a CSS marquee translating by -50% loops without a visible seam.
pub fn marquee_track<T>(items: &[T]) -> Vec<(usize, &T)> {
    items.iter().chain(items.iter()).enumerate().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PROJECTS, RAW_REELS};

    #[test]
    fn display_name_strips_extension_and_title_cases() {
        assert_eq!(display_name("Client Reel 1.mp4"), "Client Reel 1");
        assert_eq!(display_name("behind_the_scenes.MP4"), "Behind The Scenes");
        assert_eq!(display_name("reel YT 2.mp4"), "Reel YT 2");
        assert_eq!(display_name("no-extension"), "No-Extension");
        assert_eq!(display_name("mp4"), "Mp4");
    }

    #[test]
    fn youtube_reels_have_no_direct_url() {
        let reels = derive_reels(RAW_REELS);
        let yt = reels.iter().find(|r| r.source == ReelSource::Youtube).unwrap();
        assert!(yt.direct_url.is_none());
        assert!(yt.embed_url.starts_with("https://www.youtube.com/embed/"));
        assert!(yt.embed_url.contains("mute=1"));
        assert!(yt.thumbnail.ends_with("/hqdefault.jpg"));
    }

    #[test]
    fn drive_reels_expose_preview_and_download() {
        let reels = derive_reels(&RAW_REELS[..1]);
        let reel = &reels[0];
        assert_eq!(reel.id, 1);
        assert_eq!(reel.name, "Client Reel 1");
        assert_eq!(
            reel.embed_url,
            "https://drive.google.com/file/d/1PEzds--VSWIH5T64fLjOgOuYD3O941-G/preview"
        );
        assert_eq!(
            reel.direct_url.as_deref(),
            Some("https://drive.google.com/uc?export=download&id=1PEzds--VSWIH5T64fLjOgOuYD3O941-G")
        );
    }

    #[test]
    fn reel_ids_follow_list_position() {
        let reels = derive_reels(RAW_REELS);
        let ids: Vec<u32> = reels.iter().map(|r| r.id).collect();
        let expected: Vec<u32> = (1..=RAW_REELS.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn only_drive_thumbnails_are_upscaled() {
        let drive = PROJECTS.iter().find(|p| p.thumbnail.contains("drive.google.com")).unwrap();
        let youtube = PROJECTS.iter().find(|p| p.thumbnail.contains("img.youtube.com")).unwrap();
        assert!(high_res_thumbnail(drive).ends_with("&sz=w1920"));
        assert_eq!(high_res_thumbnail(youtube), youtube.thumbnail);
    }

    #[test]
    fn marquee_repeats_the_list_once() {
        let track = marquee_track(&["a", "b", "c"]);
        let labels: Vec<&str> = track.iter().map(|(_, s)| **s).collect();
        assert_eq!(labels, vec!["a", "b", "c", "a", "b", "c"]);
        assert_eq!(track.last().map(|(i, _)| *i), Some(5));
    }
}
