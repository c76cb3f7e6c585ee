mod test_transitions;
