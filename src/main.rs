fn main() {
    ytlinks::cli::run();
}
