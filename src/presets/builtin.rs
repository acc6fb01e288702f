//! Diagrams offered out of the box, in menu order.

pub const BUILTIN_PRESETS: [(&str, &str); 11] = [
    (
        "Top-Level Structure",
        r#"project_name/
├── .gitignore
├── README.md
├── LICENSE.md
├── pyproject.toml
├── setup.cfg
├── setup.py
├── venv/
└── src/"#,
    ),
    (
        "Internal Package Structure (src/)",
        r#"src/
└── project_name/
    ├── __init__.py
    ├── core/
    │   ├── __init__.py
    │   └── utils.py
    ├── models/
    │   ├── __init__.py
    │   ├── user.py
    │   └── product.py
    ├── api/
    │   ├── __init__.py
    │   └── routes.py
    └── cli.py"#,
    ),
    (
        "Testing Directory (tests/)",
        r#"project_name/
└── tests/
    ├── __init__.py
    ├── test_core.py
    ├── test_api.py
    └── conftest.py"#,
    ),
    (
        "Other Directories (docs/, scripts/, data/)",
        r#"project_name/
├── docs/
│   ├── index.rst
│   └── conf.py
├── scripts/
│   ├── install.sh
│   └── deploy.py
└── data/
    ├── raw/
    └── processed/"#,
    ),
    (
        "pip-installable Package with CLI",
        r#"my_package_project/
├── .github/
│   └── workflows/
│       └── ci.yml
├── .gitignore
├── pyproject.toml
├── README.md
├── LICENSE.md
├── requirements.txt
├── src/
│   └── my_package/
│       ├── __init__.py
│       ├── __main__.py
│       ├── cli.py
│       ├── core.py
│       ├── utils.py
│       └── models/
│           ├── __init__.py
│           └── data_models.py
└── tests/
    ├── __init__.py
    ├── test_cli.py
    ├── test_core.py
    └── conftest.py"#,
    ),
    (
        "Project with CLI and GUI",
        r#"my_package_project/
├── .github/
│   └── workflows/
│       └── ci.yml
├── .gitignore
├── pyproject.toml
├── README.md
├── LICENSE.md
├── requirements.txt
├── src/
│   └── my_package/
│       ├── __init__.py
│       ├── __main__.py
│       ├── core/
│       │   ├── __init__.py
│       │   └── logic.py
│       ├── cli/
│       │   ├── __init__.py
│       │   └── commands.py
│       └── gui/
│           ├── __init__.py
│           ├── main_window.py
│           ├── widgets.py
│           └── assets/
│               ├── icon.png
│               └── style.qss
└── tests/
    ├── __init__.py
    ├── test_cli.py
    ├── test_core.py
    ├── test_gui.py
    └── conftest.py"#,
    ),
    (
        "Standard CLI Project",
        r#"my_cli_app_project/
├── .gitignore
├── pyproject.toml
├── README.md
├── LICENSE.md
├── requirements.txt
├── src/
│   └── my_cli_app/
│       ├── __init__.py
│       ├── __main__.py
│       ├── cli.py
│       └── core/
│           ├── __init__.py
│           ├── logic.py
│           └── utils.py
└── tests/
    ├── __init__.py
    ├── test_cli.py
    ├── test_core.py
    └── conftest.py"#,
    ),
    (
        "Minimal Microservice / API-Only Structure",
        r#"simple_api_project/
├── .gitignore
├── pyproject.toml
├── README.md
├── LICENSE.md
├── requirements.txt
├── src/
│   └── simple_api/
│       ├── __init__.py
│       └── routes.py
├── run.py
└── tests/
    ├── test_routes.py
    └── conftest.py"#,
    ),
    (
        "Library with Plugin Architecture",
        r#"plugin_library_project/
├── README.md
├── pyproject.toml
├── src/
│   └── pluginlib/
│       ├── __init__.py
│       ├── core.py
│       ├── cli.py
│       └── plugins/
│           ├── __init__.py
│           ├── plugin_foo.py
│           └── plugin_bar.py
└── tests/
    ├── test_core.py
    ├── test_plugins.py
    └── conftest.py"#,
    ),
    (
        "Data Science / Analysis Workflow",
        r#"data_insights_project/
├── README.md
├── pyproject.toml
├── environment.yml
├── notebooks/
│   ├── exploration.ipynb
│   └── modeling.ipynb
├── src/
│   └── analysis/
│       ├── __init__.py
│       ├── preprocessing.py
│       ├── train.py
│       └── visualize.py
├── data/
│   ├── raw/
│   └── cleaned/
└── tests/
    ├── test_train.py
    └── test_preprocessing.py"#,
    ),
    (
        "Security-Focused or Encryption Library",
        r#"securex_project/
├── README.md
├── pyproject.toml
├── requirements.txt
├── src/
│   └── securex/
│       ├── __init__.py
│       ├── crypto/
│       │   ├── __init__.py
│       │   ├── encrypt.py
│       │   └── decrypt.py
│       └── auth/
│           ├── __init__.py
│           └── login.py
└── tests/
    ├── test_encrypt.py
    ├── test_auth.py
    └── conftest.py"#,
    ),
];
