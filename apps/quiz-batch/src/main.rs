fn main() -> anyhow::Result<()> {
    quiz_batch::run()
}
