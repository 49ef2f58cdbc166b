//! # Catalog Manager Demo
//!
//! Runs one session against the simulated remote: add a Pen, reprice it, delete it,
//! logging the table after each step.

use catalog_manager::config::CatalogConfig;
use catalog_manager::form::{Field, ProductForm};
use catalog_manager::lifecycle::{setup_tracing, CatalogSystem};
use catalog_manager::manager::{ProductManager, ViewModel};
use catalog_manager::view::EMPTY_MESSAGE;
use tracing::{info, warn, Instrument};

fn log_table(manager: &ProductManager) {
    match manager.view_model() {
        ViewModel::Loading => info!("Loading..."),
        ViewModel::Error(e) => warn!(error = %e, "Table unavailable"),
        ViewModel::Ready(page) if page.is_empty() => info!(page = %page.page_label(), "{EMPTY_MESSAGE}"),
        ViewModel::Ready(page) => {
            for row in &page.rows {
                info!(id = %row.id, name = %row.name, price = %row.price, stock = %row.stock, "Row");
            }
            info!(page = %page.page_label(), can_prev = page.can_prev, can_next = page.can_next, "Table");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting catalog session");

    let config = CatalogConfig::default();
    let system = CatalogSystem::new(&config);
    let mut manager = system.manager();

    manager.load().await;
    log_table(&manager);

    let span = tracing::info_span!("add_product");
    let created = async {
        *manager.form_mut() = ProductForm::new("Pen", "10", "100");
        manager.submit().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    let id = created.product().id;
    log_table(&manager);

    let span = tracing::info_span!("edit_product");
    async {
        manager.begin_edit(id).map_err(|e| e.to_string())?;
        manager.form_mut().set(Field::Price, "15");
        manager.submit().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    log_table(&manager);

    let span = tracing::info_span!("delete_product");
    let ack = manager
        .delete(id)
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %ack.id, success = ack.success, "Delete acknowledged");
    log_table(&manager);

    drop(manager);
    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
