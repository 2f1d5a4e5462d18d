use catalog_app::{
    context::AppContext,
    domain::products::filters::{ProductFilter, ProductQuery},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only products with exactly this name
    #[arg(long)]
    name: Option<String>,

    /// Only products in this category (e.g. FOOD)
    #[arg(long)]
    category: Option<String>,

    /// Only products with this availability (true/false)
    #[arg(long)]
    available: Option<String>,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let filter = ProductFilter::try_from(ProductQuery {
        name: args.name,
        category: args.category,
        available: args.available,
    })
    .map_err(|error| error.to_string())?;

    let app = AppContext::from_database_url(&args.database_url, false)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let products = filter.apply(
        app.products
            .list_products()
            .await
            .map_err(|error| format!("failed to list products: {error}"))?,
    );

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        if products.is_empty() {
            println!("no products match {filter}");
            return Ok(());
        }

        for product in products {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                product.id, product.name, product.price, product.category, product.available
            );
        }
    }

    Ok(())
}
