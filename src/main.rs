fn main() {
    #[cfg(feature = "csr")]
    folio::start();
}
