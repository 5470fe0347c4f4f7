use std::fmt::Write;

use trackweave::{CorrelationReport, Track};
use trackweave_vimeo::model::VideoSelection;

const REBUILD_HINT: &str = "Download and rebuild with: ffmpeg -i master.mp4 -i playlist.mp4 -c copy -map 0:v:0 -map 1:a:0 combined.mp4";

fn field<'a>(track: &'a Track, name: &str) -> &'a str {
    track.get(name).unwrap_or("?")
}

pub fn render_selection(selection: &VideoSelection) -> anyhow::Result<String> {
    let mut output = format!(
        "{title} [{quality}@{fps}]\n",
        title = selection.title,
        quality = selection.representation.quality,
        fps = selection.representation.fps
    );
    output.push_str(&render_report(&selection.report)?);
    Ok(output)
}

pub fn render_report(report: &CorrelationReport) -> anyhow::Result<String> {
    let mut output = String::new();
    for track in &report.tracks {
        writeln!(
            output,
            "Video [{}, {}@{}]: {}",
            field(&track.video, "codecs"),
            field(&track.video, "resolution"),
            field(&track.video, "frame-rate"),
            track.video.url
        )?;
        writeln!(
            output,
            "* Audio [{}ch]: {}",
            field(&track.audio, "channels"),
            track.audio.url
        )?;
        writeln!(
            output,
            "* Subtitles [{} {}]: {}",
            field(&track.subtitles, "name"),
            field(&track.subtitles, "language"),
            track.subtitles.url
        )?;
    }
    write!(output, "\n{REBUILD_HINT}\n")?;

    if !report.orphaned_audio.is_empty() {
        write!(
            output,
            "\nUnparsed audio streams:\n{}\n",
            serde_json::to_string_pretty(&report.orphaned_audio)?
        )?;
    }
    if !report.orphaned_subs.is_empty() {
        write!(
            output,
            "\nUnparsed subtitle streams:\n{}\n",
            serde_json::to_string_pretty(&report.orphaned_subs)?
        )?;
    }

    Ok(output)
}
