//! nmesh - NameMesh node administration CLI

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    namemesh_cli::run().await
}
