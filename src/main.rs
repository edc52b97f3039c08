fn main() {
    annotator_launcher::app::cli::run();
}
