use partcat_inventory::StdoutReport;

fn main() {
    partcat_observability::init();

    let inventory = partcat_cli::run(StdoutReport);

    tracing::info!(count = inventory.len(), "demo finished");
}
