use std::{path::PathBuf, sync::Arc};

use blog_studio::{
    app::{envy::Envy, util::time::current_time_in_secs},
    auth::session::MockAuthSession,
    blogs::{
        form::controller::{BlogForm, SubmitOutcome},
        store::MemoryBlogStore,
    },
    dashboard::{
        enums::dashboard_tab::DashboardTab,
        shell::{Dashboard, DashboardPanel},
    },
    editor::commands::{EditorCommand, HeadingLevel, Key},
    media::models::image_file::ImageFile,
    navbar::navbar::Navbar,
    routing::navigator::HistoryNavigator,
    AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let navigator = Arc::new(HistoryNavigator::new());
    let state = AppState {
        store: Arc::new(MemoryBlogStore::seeded()),
        auth: Arc::new(MockAuthSession::signed_in("alex")),
        navigator: navigator.clone(),
        envy: Arc::new(envy),
    };

    let navbar = Navbar::new();
    for link in navbar.links(state.auth.as_ref()) {
        tracing::info!("nav: {} -> {}", link.label, link.route.path());
    }

    // authoring
    let mut form = BlogForm::new(state.clone());
    form.set_title("Sunlit Studio by the Harbor");
    form.set_excerpt("A compact studio with harbor views and a rooftop deck.");
    form.set_category_value("Coastal");
    form.set_read_time_input("4");
    for tag in ["studio", "harbor"] {
        form.set_current_tag(tag);
        form.on_tag_key(Key::Enter);
    }
    form.apply_editor_command(EditorCommand::SetContent(
        "<p>Morning light, sea air and a five minute walk to the ferry.</p>".to_string(),
    ));
    form.apply_editor_command(EditorCommand::ToggleHeading(HeadingLevel::H2));

    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match ImageFile::from_path(&path).await {
            Ok(file) => {
                if let Err(e) = form.upload_cover_image(&file) {
                    tracing::error!(%e);
                }
            }
            Err(e) => tracing::error!(%e),
        }
    } else {
        let placeholder = ImageFile::new("cover.jpg", mime::IMAGE_JPEG, b"placeholder".to_vec());
        if let Err(e) = form.upload_cover_image(&placeholder) {
            tracing::error!(%e);
        }
    }

    match form.submit().await {
        SubmitOutcome::Saved { id } => {
            tracing::info!("{} (post {})", form.success_message().unwrap_or_default(), id);
            if let Some(redirect) = form.take_redirect() {
                redirect.wait().await;
            }
            tracing::info!("now at {:?}", navigator.current());
        }
        SubmitOutcome::Invalid { first_field } => {
            tracing::warn!("form invalid, first field {}", first_field.value());
        }
        outcome => tracing::warn!("submission ended with {:?}", outcome),
    }

    // dashboard
    let mut dashboard = match Dashboard::load(&state, current_time_in_secs()).await {
        Ok(dashboard) => dashboard,
        Err(e) => panic!("{:#?}", e),
    };
    dashboard.select_tab(DashboardTab::Stats);

    if let DashboardPanel::Stats(stats) = dashboard.panel() {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(%e),
        }
    }
}
