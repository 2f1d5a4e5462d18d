//! App Router

use salvo::Router;

use crate::{content_type::require_json, healthcheck, home, products};

/// Routes served by the API, without the global hoops.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(
                    Router::new()
                        .hoop(require_json)
                        .post(products::create::handler),
                )
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::new()
                                .hoop(require_json)
                                .put(products::update::handler),
                        ),
                ),
        )
}
