mod page;

use std::path::PathBuf;
use rocket::{
    fairing::AdHoc,
    figment::Figment,
    fs::NamedFile,
    get,
    launch,
    response::{
        content::RawHtml,
        status::NotFound,
    },
    routes,
    serde::Deserialize,
    Build,
    Rocket,
    State,
};

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
struct AppConfig {
    /// Directory holding the compiled UI bundle (`trunk build` output).
    #[serde(default = "AppConfig::default_ui_dist")]
    ui_dist: PathBuf,
}

impl AppConfig {
    fn default_ui_dist() -> PathBuf {
        PathBuf::from("../ui/dist")
    }
}

fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AdHoc::config::<AppConfig>())
        .attach(AdHoc::on_liftoff("UI bundle", |rocket| Box::pin(async move {
            if let Some(config) = rocket.state::<AppConfig>() {
                log::info!("serving UI bundle from {}", config.ui_dist.display());
            }
        })))
        .mount("/", routes![index, bundle])
}

#[launch]
fn rocket() -> _ {
    build(rocket::Config::figment())
}

#[get("/")]
fn index() -> RawHtml<&'static str> {
    RawHtml(page::INDEX)
}

#[get("/pkg/<path..>")]
async fn bundle(path: PathBuf, config: &State<AppConfig>) -> Result<NamedFile, NotFound<String>> {
    let path = config.ui_dist.join(path);
    NamedFile::open(&path).await
        .map_err(|e| {
            log::warn!("missing bundle file {}: {}", path.display(), e);
            NotFound(e.to_string())
        })
}
