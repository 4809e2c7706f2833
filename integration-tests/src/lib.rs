pub mod test_functions;
