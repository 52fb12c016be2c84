use episode_page::error::{OkOrPage, Result};
use episode_page::links::PLATFORM_ICONS;
use episode_page::page::{HtmlSurface, CONTAINER_ID};
use episode_page::render::ViewRenderer;
use episode_page::source::HttpSource;
use std::fs;

#[tokio::main]
async fn main() -> Result<()> {
	let _logger = flexi_logger::Logger::try_with_env_or_str("info")?
		.log_to_stdout()
		.start()?;

	let mut args = std::env::args().skip(1);
	let base_url = args
		.next()
		.ok_or_page("Usage: episode-page <base-url> <template> <out-file> [fragment]")?;
	let template_path = args.next().ok_or_page("Missing template path.")?;
	let out_path = args.next().ok_or_page("Missing output path.")?;
	let fragment = args.next();

	let template = fs::read_to_string(&template_path)?;
	let surface = match HtmlSurface::locate(&template, CONTAINER_ID) {
		Some(surface) => surface,
		None => {
			log::error!("episodes container not found in {}", template_path);
			return Ok(());
		}
	};

	let source = HttpSource::new(&base_url);
	let mut view = ViewRenderer::new(&PLATFORM_ICONS, surface);
	let state = view.run(&source, fragment.as_deref()).await;
	fs::write(&out_path, view.mount().page())?;
	log::info!("wrote {} ({:?})", out_path, state);
	Ok(())
}
