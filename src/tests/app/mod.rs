mod keymap_tests;
