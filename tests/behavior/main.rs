mod backend;
mod operations;

pub use backend::FakeBackend;
pub use libtest_mimic::Trial;
pub use utils::*;

use libtest_mimic::Arguments;

fn main() {
    let args = Arguments::from_args();

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut tests = Vec::new();
    operations::list::tests(&mut tests);
    operations::delete::tests(&mut tests);
    operations::workflow::tests(&mut tests);
    operations::config::tests(&mut tests);

    libtest_mimic::run(&args, tests).exit();
}
