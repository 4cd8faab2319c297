fn main() -> anyhow::Result<()> {
    sellerkit_observability::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    sellerkit_quote::run(stdin.lock(), stdout.lock())
}
