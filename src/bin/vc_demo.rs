//! Commit to a small vector, open one position and verify it
//!
//! Set `RUST_LOG=debug` to see the scheme's spans and events.

use cdh_vc::functional::{commit, key_gen, open, verify};
use cdh_vc::VcError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), VcError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let m = [1, 2, 3];
    let (_z, h_vec, h_mat) = key_gen(m.len())?;

    let c = commit(&m, &h_vec)?;
    let l_0 = open(0, &m, &h_mat)?;

    let check = verify(&c, m[0], 0, &l_0, &h_vec)?;
    println!("Check: {}", check);

    Ok(())
}
