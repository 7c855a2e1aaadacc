mod test_session;
