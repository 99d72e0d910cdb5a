mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use vacsched_api::Application;
use vacsched_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("vacsched_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}
