//! `illustrate` command handler.

use super::backends::image_backend;
use std::path::PathBuf;
use storyloom_core::{DEFAULT_STYLE_PROMPT, ReferenceImage, StoryloomConfig};
use storyloom_error::StoryloomResult;
use storyloom_illustration::{IllustrationWorkflow, save_illustration, scene_prompt};

/// Handle the `illustrate` command
///
/// Without a reference image the first custom style is used, as the
/// inference would pick it anyway.
pub async fn handle_illustrate(
    config: StoryloomConfig,
    reference: Option<PathBuf>,
    steps: Option<u32>,
    output: PathBuf,
) -> StoryloomResult<()> {
    let image = image_backend(&config).await?;
    let workflow = IllustrationWorkflow::from_config(image, &config);

    let art_style = match reference {
        Some(path) => {
            workflow
                .infer_style_from_reference(&ReferenceImage::Path(path))
                .await
        }
        None => config
            .art_styles()
            .first_custom_style()
            .unwrap_or(DEFAULT_STYLE_PROMPT)
            .to_string(),
    };
    tracing::info!(%art_style, "Rendering scene");

    let illustration = workflow
        .generate_illustration(&scene_prompt(&art_style), None, steps)
        .await?;
    save_illustration(&illustration, &output).await?;

    println!("Saved {}", output.display());
    Ok(())
}
