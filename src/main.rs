fn main() {
    range_drill::cli::run();
}
