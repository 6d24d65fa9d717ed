//! Bundled translation strings.
//!
//! Each entry lists its strings in picker order:
//! en-US, zh-CN, zh-TW, ja-JP, de-DE, fr-FR, ru-RU, es-ES.
//!
//! Strings are stored raw. Placeholders use `{name}` and must appear with the
//! same names in every language (checked by `TranslationValidator`).

use crate::i18n::TranslationEntry;

/// All bundled translations, keyed by translation key.
pub(crate) static TRANSLATIONS: &[(&str, TranslationEntry)] = &[
    // ==================== Common ====================
    (
        "common.confirm",
        TranslationEntry::new([
            "Confirm",
            "确认",
            "確認",
            "確認",
            "Bestätigen",
            "Confirmer",
            "Подтвердить",
            "Confirmar",
        ]),
    ),
    (
        "common.cancel",
        TranslationEntry::new([
            "Cancel",
            "取消",
            "取消",
            "キャンセル",
            "Abbrechen",
            "Annuler",
            "Отмена",
            "Cancelar",
        ]),
    ),
    (
        "common.save",
        TranslationEntry::new([
            "Save",
            "保存",
            "儲存",
            "保存",
            "Speichern",
            "Enregistrer",
            "Сохранить",
            "Guardar",
        ]),
    ),
    (
        "common.delete",
        TranslationEntry::new([
            "Delete",
            "删除",
            "刪除",
            "削除",
            "Löschen",
            "Supprimer",
            "Удалить",
            "Eliminar",
        ]),
    ),
    (
        "common.close",
        TranslationEntry::new([
            "Close",
            "关闭",
            "關閉",
            "閉じる",
            "Schließen",
            "Fermer",
            "Закрыть",
            "Cerrar",
        ]),
    ),
    (
        "common.loading",
        TranslationEntry::new([
            "Loading...",
            "加载中...",
            "載入中...",
            "読み込み中...",
            "Wird geladen...",
            "Chargement...",
            "Загрузка...",
            "Cargando...",
        ]),
    ),
    (
        "common.search",
        TranslationEntry::new([
            "Search",
            "搜索",
            "搜尋",
            "検索",
            "Suchen",
            "Rechercher",
            "Поиск",
            "Buscar",
        ]),
    ),
    // ==================== Settings ====================
    (
        "settings.title",
        TranslationEntry::new([
            "PDF Library Settings",
            "PDF 文献库设置",
            "PDF 文獻庫設定",
            "PDF ライブラリ設定",
            "PDF-Bibliothek-Einstellungen",
            "Paramètres de la bibliothèque PDF",
            "Настройки библиотеки PDF",
            "Configuración de la biblioteca PDF",
        ]),
    ),
    (
        "settings.language.name",
        TranslationEntry::new([
            "Interface language",
            "界面语言",
            "介面語言",
            "表示言語",
            "Oberflächensprache",
            "Langue de l'interface",
            "Язык интерфейса",
            "Idioma de la interfaz",
        ]),
    ),
    (
        "settings.language.desc",
        TranslationEntry::new([
            "Choose the language used by the plugin interface.",
            "选择插件界面使用的语言。",
            "選擇外掛介面使用的語言。",
            "プラグインのインターフェースで使用する言語を選択します。",
            "Wählen Sie die Sprache der Plugin-Oberfläche.",
            "Choisissez la langue de l'interface du plugin.",
            "Выберите язык интерфейса плагина.",
            "Elige el idioma de la interfaz del complemento.",
        ]),
    ),
    (
        "settings.libraryFolder.name",
        TranslationEntry::new([
            "Library folder",
            "文献库文件夹",
            "文獻庫資料夾",
            "ライブラリフォルダ",
            "Bibliotheksordner",
            "Dossier de la bibliothèque",
            "Папка библиотеки",
            "Carpeta de la biblioteca",
        ]),
    ),
    (
        "settings.libraryFolder.desc",
        TranslationEntry::new([
            "Folder in your vault where PDF files are stored.",
            "仓库中存放 PDF 文件的文件夹。",
            "儲存庫中存放 PDF 檔案的資料夾。",
            "PDF ファイルを保存する保管庫内のフォルダ。",
            "Ordner in Ihrem Vault, in dem PDF-Dateien gespeichert werden.",
            "Dossier de votre coffre où sont stockés les fichiers PDF.",
            "Папка в хранилище, где хранятся PDF-файлы.",
            "Carpeta de tu bóveda donde se guardan los archivos PDF.",
        ]),
    ),
    (
        "settings.autoScan.name",
        TranslationEntry::new([
            "Scan on startup",
            "启动时扫描",
            "啟動時掃描",
            "起動時にスキャン",
            "Beim Start scannen",
            "Analyser au démarrage",
            "Сканировать при запуске",
            "Escanear al iniciar",
        ]),
    ),
    (
        "settings.autoScan.desc",
        TranslationEntry::new([
            "Scan the library folder for new PDF files when the plugin loads.",
            "插件加载时扫描文献库文件夹中的新 PDF 文件。",
            "外掛載入時掃描文獻庫資料夾中的新 PDF 檔案。",
            "プラグインの読み込み時にライブラリフォルダの新しい PDF ファイルをスキャンします。",
            "Beim Laden des Plugins den Bibliotheksordner nach neuen PDF-Dateien durchsuchen.",
            "Rechercher de nouveaux fichiers PDF dans le dossier de la bibliothèque au chargement du plugin.",
            "Искать новые PDF-файлы в папке библиотеки при загрузке плагина.",
            "Buscar nuevos archivos PDF en la carpeta de la biblioteca al cargar el complemento.",
        ]),
    ),
    (
        "settings.downloadTimeout.name",
        TranslationEntry::new([
            "Download timeout (seconds)",
            "下载超时（秒）",
            "下載逾時（秒）",
            "ダウンロードのタイムアウト（秒）",
            "Download-Zeitlimit (Sekunden)",
            "Délai de téléchargement (secondes)",
            "Тайм-аут загрузки (секунды)",
            "Tiempo de espera de descarga (segundos)",
        ]),
    ),
    (
        "settings.instructions",
        TranslationEntry::new([
            "How to use:\n\
1. Put PDF files in the library folder.\n\
2. Run \"Scan library\" from the command palette.\n\
3. Open a PDF to create its note.",
            "使用方法：\n\
1. 将 PDF 文件放入文献库文件夹。\n\
2. 在命令面板中运行“扫描文献库”。\n\
3. 打开 PDF 以创建对应笔记。",
            "使用方式：\n\
1. 將 PDF 檔案放入文獻庫資料夾。\n\
2. 在命令面板中執行「掃描文獻庫」。\n\
3. 開啟 PDF 以建立對應筆記。",
            "使い方：\n\
1. PDF ファイルをライブラリフォルダに入れます。\n\
2. コマンドパレットから「ライブラリをスキャン」を実行します。\n\
3. PDF を開くとノートが作成されます。",
            "Verwendung:\n\
1. Legen Sie PDF-Dateien in den Bibliotheksordner.\n\
2. Führen Sie „Bibliothek scannen“ in der Befehlspalette aus.\n\
3. Öffnen Sie ein PDF, um seine Notiz zu erstellen.",
            "Utilisation :\n\
1. Placez les fichiers PDF dans le dossier de la bibliothèque.\n\
2. Lancez « Analyser la bibliothèque » depuis la palette de commandes.\n\
3. Ouvrez un PDF pour créer sa note.",
            "Как пользоваться:\n\
1. Поместите PDF-файлы в папку библиотеки.\n\
2. Запустите «Сканировать библиотеку» из палитры команд.\n\
3. Откройте PDF, чтобы создать заметку.",
            "Cómo usar:\n\
1. Coloca los archivos PDF en la carpeta de la biblioteca.\n\
2. Ejecuta \"Escanear biblioteca\" desde la paleta de comandos.\n\
3. Abre un PDF para crear su nota.",
        ]),
    ),
    // ==================== Commands ====================
    (
        "commands.scanLibrary",
        TranslationEntry::new([
            "Scan library",
            "扫描文献库",
            "掃描文獻庫",
            "ライブラリをスキャン",
            "Bibliothek scannen",
            "Analyser la bibliothèque",
            "Сканировать библиотеку",
            "Escanear biblioteca",
        ]),
    ),
    (
        "commands.openLibrary",
        TranslationEntry::new([
            "Open PDF library",
            "打开 PDF 文献库",
            "開啟 PDF 文獻庫",
            "PDF ライブラリを開く",
            "PDF-Bibliothek öffnen",
            "Ouvrir la bibliothèque PDF",
            "Открыть библиотеку PDF",
            "Abrir biblioteca PDF",
        ]),
    ),
    (
        "commands.downloadPdf",
        TranslationEntry::new([
            "Download PDF from URL",
            "从 URL 下载 PDF",
            "從 URL 下載 PDF",
            "URL から PDF をダウンロード",
            "PDF von URL herunterladen",
            "Télécharger un PDF depuis une URL",
            "Скачать PDF по URL",
            "Descargar PDF desde URL",
        ]),
    ),
    // ==================== Notices ====================
    (
        "notices.languageChanged",
        TranslationEntry::new([
            "Language changed to {language}",
            "语言已切换为 {language}",
            "語言已切換為 {language}",
            "言語を {language} に変更しました",
            "Sprache geändert zu {language}",
            "Langue changée en {language}",
            "Язык изменён на {language}",
            "Idioma cambiado a {language}",
        ]),
    ),
    (
        "notices.fileDeleted",
        TranslationEntry::new([
            "File deleted: {filename}",
            "文件已删除：{filename}",
            "檔案已刪除：{filename}",
            "ファイルを削除しました：{filename}",
            "Datei gelöscht: {filename}",
            "Fichier supprimé : {filename}",
            "Файл удалён: {filename}",
            "Archivo eliminado: {filename}",
        ]),
    ),
    (
        "notices.fileRenamed",
        TranslationEntry::new([
            "Renamed {oldName} to {newName}",
            "已将 {oldName} 重命名为 {newName}",
            "已將 {oldName} 重新命名為 {newName}",
            "{oldName} を {newName} に名前変更しました",
            "{oldName} wurde in {newName} umbenannt",
            "{oldName} renommé en {newName}",
            "{oldName} переименован в {newName}",
            "{oldName} renombrado a {newName}",
        ]),
    ),
    (
        "notices.scanComplete",
        TranslationEntry::new([
            "Scan complete: {count} new files, {skipped} skipped",
            "扫描完成：新增 {count} 个文件，跳过 {skipped} 个",
            "掃描完成：新增 {count} 個檔案，略過 {skipped} 個",
            "スキャン完了：新規 {count} 件、スキップ {skipped} 件",
            "Scan abgeschlossen: {count} neue Dateien, {skipped} übersprungen",
            "Analyse terminée : {count} nouveaux fichiers, {skipped} ignorés",
            "Сканирование завершено: новых файлов {count}, пропущено {skipped}",
            "Escaneo completado: {count} archivos nuevos, {skipped} omitidos",
        ]),
    ),
    (
        "notices.downloadStarted",
        TranslationEntry::new([
            "Downloading {url}...",
            "正在下载 {url}...",
            "正在下載 {url}...",
            "{url} をダウンロード中...",
            "{url} wird heruntergeladen...",
            "Téléchargement de {url}...",
            "Загрузка {url}...",
            "Descargando {url}...",
        ]),
    ),
    (
        "notices.downloadComplete",
        TranslationEntry::new([
            "Downloaded {filename}",
            "已下载 {filename}",
            "已下載 {filename}",
            "{filename} をダウンロードしました",
            "{filename} heruntergeladen",
            "{filename} téléchargé",
            "{filename} загружен",
            "{filename} descargado",
        ]),
    ),
    (
        "notices.downloadFailed",
        TranslationEntry::new([
            "Download failed: {error}",
            "下载失败：{error}",
            "下載失敗：{error}",
            "ダウンロードに失敗しました：{error}",
            "Download fehlgeschlagen: {error}",
            "Échec du téléchargement : {error}",
            "Ошибка загрузки: {error}",
            "Error en la descarga: {error}",
        ]),
    ),
    (
        "notices.databaseError",
        TranslationEntry::new([
            "Could not save library data. Check the developer console for details.",
            "无法保存文献库数据。请查看开发者控制台了解详情。",
            "無法儲存文獻庫資料。請查看開發者主控台以了解詳情。",
            "ライブラリデータを保存できませんでした。詳細は開発者コンソールを確認してください。",
            "Bibliotheksdaten konnten nicht gespeichert werden. Details finden Sie in der Entwicklerkonsole.",
            "Impossible d'enregistrer les données de la bibliothèque. Consultez la console développeur pour plus de détails.",
            "Не удалось сохранить данные библиотеки. Подробности в консоли разработчика.",
            "No se pudieron guardar los datos de la biblioteca. Consulta la consola de desarrollador para más detalles.",
        ]),
    ),
    // ==================== Modals ====================
    (
        "modals.deleteConfirm.title",
        TranslationEntry::new([
            "Delete PDF",
            "删除 PDF",
            "刪除 PDF",
            "PDF を削除",
            "PDF löschen",
            "Supprimer le PDF",
            "Удалить PDF",
            "Eliminar PDF",
        ]),
    ),
    (
        "modals.deleteConfirm.message",
        TranslationEntry::new([
            "Are you sure you want to delete \"{filename}\"? This cannot be undone.",
            "确定要删除“{filename}”吗？此操作无法撤销。",
            "確定要刪除「{filename}」嗎？此操作無法復原。",
            "「{filename}」を削除してもよろしいですか？この操作は元に戻せません。",
            "Möchten Sie „{filename}“ wirklich löschen? Dies kann nicht rückgängig gemacht werden.",
            "Voulez-vous vraiment supprimer « {filename} » ? Cette action est irréversible.",
            "Удалить «{filename}»? Это действие нельзя отменить.",
            "¿Seguro que quieres eliminar \"{filename}\"? Esta acción no se puede deshacer.",
        ]),
    ),
    (
        "modals.download.title",
        TranslationEntry::new([
            "Download PDF",
            "下载 PDF",
            "下載 PDF",
            "PDF をダウンロード",
            "PDF herunterladen",
            "Télécharger un PDF",
            "Скачать PDF",
            "Descargar PDF",
        ]),
    ),
    (
        "modals.download.urlPlaceholder",
        TranslationEntry::new([
            "Paste a PDF link",
            "粘贴 PDF 链接",
            "貼上 PDF 連結",
            "PDF のリンクを貼り付け",
            "PDF-Link einfügen",
            "Collez un lien PDF",
            "Вставьте ссылку на PDF",
            "Pega un enlace PDF",
        ]),
    ),
    (
        "modals.download.invalidUrl",
        TranslationEntry::new([
            "Please enter a valid URL",
            "请输入有效的 URL",
            "請輸入有效的 URL",
            "有効な URL を入力してください",
            "Bitte geben Sie eine gültige URL ein",
            "Veuillez saisir une URL valide",
            "Введите корректный URL",
            "Introduce una URL válida",
        ]),
    ),
    // ==================== Library View ====================
    (
        "library.empty",
        TranslationEntry::new([
            "No PDF files yet. Add files to {folder} and run a scan.",
            "还没有 PDF 文件。请将文件添加到 {folder} 并运行扫描。",
            "尚無 PDF 檔案。請將檔案加入 {folder} 並執行掃描。",
            "PDF ファイルはまだありません。{folder} にファイルを追加してスキャンしてください。",
            "Noch keine PDF-Dateien. Fügen Sie Dateien zu {folder} hinzu und starten Sie einen Scan.",
            "Aucun fichier PDF pour l'instant. Ajoutez des fichiers à {folder} puis lancez une analyse.",
            "PDF-файлов пока нет. Добавьте файлы в {folder} и запустите сканирование.",
            "Aún no hay archivos PDF. Añade archivos a {folder} y ejecuta un escaneo.",
        ]),
    ),
    (
        "library.fileCount",
        TranslationEntry::new([
            "{count} PDFs in library",
            "文献库中有 {count} 个 PDF",
            "文獻庫中有 {count} 個 PDF",
            "ライブラリ内の PDF：{count} 件",
            "{count} PDFs in der Bibliothek",
            "{count} PDF dans la bibliothèque",
            "PDF в библиотеке: {count}",
            "{count} PDF en la biblioteca",
        ]),
    ),
    (
        "library.scanning",
        TranslationEntry::new([
            "Scanning...",
            "正在扫描...",
            "正在掃描...",
            "スキャン中...",
            "Wird gescannt...",
            "Analyse en cours...",
            "Сканирование...",
            "Escaneando...",
        ]),
    ),
    (
        "library.sortBy",
        TranslationEntry::new([
            "Sort by",
            "排序方式",
            "排序方式",
            "並べ替え",
            "Sortieren nach",
            "Trier par",
            "Сортировать по",
            "Ordenar por",
        ]),
    ),
    (
        "library.sort.name",
        TranslationEntry::new([
            "Name",
            "名称",
            "名稱",
            "名前",
            "Name",
            "Nom",
            "Имя",
            "Nombre",
        ]),
    ),
    (
        "library.sort.dateAdded",
        TranslationEntry::new([
            "Date added",
            "添加日期",
            "新增日期",
            "追加日",
            "Hinzugefügt am",
            "Date d'ajout",
            "Дата добавления",
            "Fecha de incorporación",
        ]),
    ),
    (
        "library.sort.size",
        TranslationEntry::new([
            "Size",
            "大小",
            "大小",
            "サイズ",
            "Größe",
            "Taille",
            "Размер",
            "Tamaño",
        ]),
    ),
    (
        "library.columns.tags",
        TranslationEntry::new([
            "Tags, keywords",
            "标签，关键词",
            "標籤，關鍵字",
            "タグ、キーワード",
            "Tags, Schlagwörter",
            "Étiquettes, mots-clés",
            "Теги, ключевые слова",
            "Etiquetas, palabras clave",
        ]),
    ),
];
